use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::conversion::{convert_image_to_3d, ModelConverter};
use super::responder::{KeywordStylist, StylistError, WELCOME_MESSAGE};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelRequest {
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model_url: Option<String>,
}

/// Shared state for the stylist chat and the 3D model preview.
pub struct StylistState<C: ?Sized> {
    pub stylist: KeywordStylist,
    pub converter: Arc<C>,
}

impl<C: ?Sized> StylistState<C> {
    pub fn new(stylist: KeywordStylist, converter: Arc<C>) -> Self {
        Self { stylist, converter }
    }
}

pub fn stylist_router<C>(state: Arc<StylistState<C>>) -> Router
where
    C: ModelConverter + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/stylist/welcome", get(welcome_handler))
        .route("/api/v1/stylist/chat", post(chat_handler::<C>))
        .route("/api/v1/stylist/model", post(model_handler::<C>))
        .with_state(state)
}

pub(crate) async fn welcome_handler() -> Json<serde_json::Value> {
    Json(json!({ "text": WELCOME_MESSAGE }))
}

pub(crate) async fn chat_handler<C>(
    State(state): State<Arc<StylistState<C>>>,
    Json(request): Json<ChatRequest>,
) -> Response
where
    C: ModelConverter + ?Sized + 'static,
{
    match state.stylist.reply(&request.message) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error @ StylistError::EmptyMessage) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn model_handler<C>(
    State(state): State<Arc<StylistState<C>>>,
    Json(request): Json<ModelRequest>,
) -> Json<ModelResponse>
where
    C: ModelConverter + ?Sized + 'static,
{
    let model_url = convert_image_to_3d(state.converter.as_ref(), &request.image_url).await;
    Json(ModelResponse { model_url })
}

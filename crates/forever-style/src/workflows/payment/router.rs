use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::card::{brand_label, CardNumberInput};
use super::expiry::ExpiryInput;
use super::wallet::{
    CardId, CardRepository, CardRepositoryError, CardSubmission, CardWalletService, UserId,
    WalletError,
};

#[derive(Debug, Deserialize)]
pub struct CardInspectionRequest {
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Defaults to the server's local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct CardInspectionResponse {
    pub card: CardNumberInput,
    pub brand_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<ExpiryInput>,
}

/// Live card-form feedback: formatting, brand and expiry checks.
pub fn inspect_card(request: CardInspectionRequest) -> CardInspectionResponse {
    let today = request
        .today
        .unwrap_or_else(|| Local::now().date_naive());
    let card = CardNumberInput::from_raw(&request.card_number);
    let expiry = request
        .expiry_date
        .as_deref()
        .map(|raw| ExpiryInput::from_raw(raw, today));

    CardInspectionResponse {
        brand_label: brand_label(card.detected_brand),
        card,
        expiry,
    }
}

/// Router builder for card inspection and the saved-card wallet.
pub fn payment_router<R>(wallet: Arc<CardWalletService<R>>) -> Router
where
    R: CardRepository + 'static,
{
    Router::new()
        .route("/api/v1/payment/cards/inspect", post(inspect_handler))
        .route(
            "/api/v1/users/:user_id/cards",
            get(list_cards_handler::<R>).post(add_card_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/cards/:card_id",
            delete(remove_card_handler::<R>),
        )
        .with_state(wallet)
}

pub(crate) async fn inspect_handler(
    Json(request): Json<CardInspectionRequest>,
) -> Json<CardInspectionResponse> {
    Json(inspect_card(request))
}

pub(crate) async fn list_cards_handler<R>(
    State(wallet): State<Arc<CardWalletService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: CardRepository + 'static,
{
    match wallet.cards(&UserId(user_id)) {
        Ok(cards) => (StatusCode::OK, Json(cards)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_card_handler<R>(
    State(wallet): State<Arc<CardWalletService<R>>>,
    Path(user_id): Path<String>,
    Json(submission): Json<CardSubmission>,
) -> Response
where
    R: CardRepository + 'static,
{
    let today = Local::now().date_naive();
    match wallet.add_card(&UserId(user_id), submission, today) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn remove_card_handler<R>(
    State(wallet): State<Arc<CardWalletService<R>>>,
    Path((user_id, card_id)): Path<(String, String)>,
) -> Response
where
    R: CardRepository + 'static,
{
    match wallet.remove(&UserId(user_id), &CardId(card_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: WalletError) -> Response {
    let status = match &error {
        WalletError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        WalletError::Repository(CardRepositoryError::NotFound) => StatusCode::NOT_FOUND,
        WalletError::Repository(CardRepositoryError::Conflict) => StatusCode::CONFLICT,
        WalletError::Repository(CardRepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

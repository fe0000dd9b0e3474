use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::blueprint::StyleQuiz;
use super::classifier::classify_style;
use super::domain::{QuizQuestion, StyleCategory, StyleProfile, UnknownStyleCategory};
use super::session::{InvalidQuizState, QuizEvent, QuizSession, QuizSnapshot, QuizState};

#[derive(Debug, Serialize)]
pub struct QuizOverview {
    pub question_count: usize,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct QuizTransitionRequest {
    #[serde(default)]
    pub state: Option<QuizState>,
    pub event: QuizEvent,
}

#[derive(Debug, Serialize)]
pub struct QuizTransitionResponse {
    pub state: QuizState,
    pub session: QuizSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<StyleProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub answers: Vec<StyleCategory>,
}

/// Errors surfaced by the quiz endpoints.
#[derive(Debug, thiserror::Error)]
pub enum QuizRequestError {
    #[error("at least one answer is required to classify a style")]
    EmptyAnswers,
    #[error(transparent)]
    InvalidState(#[from] InvalidQuizState),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownStyleCategory),
}

impl IntoResponse for QuizRequestError {
    fn into_response(self) -> Response {
        let status = match self {
            QuizRequestError::EmptyAnswers | QuizRequestError::InvalidState(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            QuizRequestError::UnknownCategory(_) => StatusCode::NOT_FOUND,
        };
        let payload = json!({ "error": self.to_string() });
        (status, Json(payload)).into_response()
    }
}

/// Router builder for the stateless quiz endpoints. Clients hold the quiz
/// state and send it back with every event.
pub fn quiz_router(quiz: Arc<StyleQuiz>) -> Router {
    Router::new()
        .route("/api/v1/quiz", get(overview_handler))
        .route("/api/v1/quiz/transition", post(transition_handler))
        .route("/api/v1/quiz/classify", post(classify_handler))
        .route("/api/v1/quiz/profiles/:category", get(profile_handler))
        .with_state(quiz)
}

pub(crate) async fn overview_handler(State(quiz): State<Arc<StyleQuiz>>) -> Json<QuizOverview> {
    Json(QuizOverview {
        question_count: quiz.question_count(),
        questions: quiz.questions().to_vec(),
    })
}

pub(crate) async fn transition_handler(
    State(quiz): State<Arc<StyleQuiz>>,
    Json(request): Json<QuizTransitionRequest>,
) -> Result<Json<QuizTransitionResponse>, QuizRequestError> {
    let mut session = match request.state {
        Some(state) => QuizSession::resume(&quiz, state)?,
        None => QuizSession::new(&quiz),
    };
    session.apply(request.event);

    Ok(Json(QuizTransitionResponse {
        session: session.snapshot(),
        question: session.current_question().cloned(),
        profile: session.profile().cloned(),
        state: session.into_state(),
    }))
}

pub(crate) async fn classify_handler(
    State(quiz): State<Arc<StyleQuiz>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<StyleProfile>, QuizRequestError> {
    let category = classify_style(&request.answers).ok_or(QuizRequestError::EmptyAnswers)?;
    Ok(Json(quiz.profile(category).clone()))
}

pub(crate) async fn profile_handler(
    State(quiz): State<Arc<StyleQuiz>>,
    Path(category): Path<String>,
) -> Result<Json<StyleProfile>, QuizRequestError> {
    let category: StyleCategory = category.parse()?;
    Ok(Json(quiz.profile(category).clone()))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{NewProduct, ProductId};
use super::repository::{ProductRepository, RepositoryError};
use super::service::{CatalogService, CatalogServiceError};

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Router builder exposing catalog browsing and admin product endpoints.
pub fn catalog_router<R>(service: Arc<CatalogService<R>>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/products",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/v1/products/:product_id",
            get(fetch_handler::<R>).delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/products/:product_id/status",
            post(toggle_status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<ProductQuery>,
) -> Response
where
    R: ProductRepository + 'static,
{
    let result = match (query.q.as_deref(), query.category.as_deref()) {
        (Some(q), Some(category)) => service.search(q).map(|products| {
            products
                .into_iter()
                .filter(|product| product.category.eq_ignore_ascii_case(category.trim()))
                .collect::<Vec<_>>()
        }),
        (Some(q), None) => service.search(q),
        (None, Some(category)) => service.by_category(category),
        (None, None) => service.list(),
    };

    match result {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(product_id): Path<String>,
) -> Response
where
    R: ProductRepository + 'static,
{
    match service.get(&ProductId(product_id)) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(submission): Json<NewProduct>,
) -> Response
where
    R: ProductRepository + 'static,
{
    match service.add_product(submission) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn toggle_status_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(product_id): Path<String>,
) -> Response
where
    R: ProductRepository + 'static,
{
    match service.toggle_status(&ProductId(product_id)) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(product_id): Path<String>,
) -> Response
where
    R: ProductRepository + 'static,
{
    match service.delete(&ProductId(product_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CatalogServiceError) -> Response {
    let status = match &error {
        CatalogServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CatalogServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        CatalogServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use forever_style::error::AppError;
use forever_style::workflows::catalog::{
    catalog_router, CatalogImporter, CatalogService, ProductId, ProductRepository,
    RepositoryError,
};
use forever_style::workflows::payment::{payment_router, CardRepository, CardWalletService};
use forever_style::workflows::quiz::{quiz_router, StyleQuiz};
use forever_style::workflows::stylist::{stylist_router, ModelConverter, StylistState};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogImportResponse {
    pub(crate) imported: usize,
    pub(crate) skipped: Vec<ProductId>,
}

/// Services shared by every storefront route.
pub(crate) struct Storefront<P, W, C: ?Sized> {
    pub(crate) catalog: Arc<CatalogService<P>>,
    pub(crate) quiz: Arc<StyleQuiz>,
    pub(crate) wallet: Arc<CardWalletService<W>>,
    pub(crate) stylist: Arc<StylistState<C>>,
}

pub(crate) fn with_storefront_routes<P, W, C>(storefront: Storefront<P, W, C>) -> axum::Router
where
    P: ProductRepository + 'static,
    W: CardRepository + 'static,
    C: ModelConverter + ?Sized + 'static,
{
    let import = axum::Router::new()
        .route(
            "/api/v1/products/import",
            axum::routing::post(catalog_import_endpoint::<P>),
        )
        .with_state(storefront.catalog.clone());

    catalog_router(storefront.catalog)
        .merge(import)
        .merge(quiz_router(storefront.quiz))
        .merge(payment_router(storefront.wallet))
        .merge(stylist_router(storefront.stylist))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Bulk-load products from an uploaded CSV export. Rows whose id already
/// exists are skipped.
pub(crate) async fn catalog_import_endpoint<P>(
    State(catalog): State<Arc<CatalogService<P>>>,
    Json(payload): Json<CatalogImportRequest>,
) -> Result<axum::response::Response, AppError>
where
    P: ProductRepository + 'static,
{
    let products = CatalogImporter::from_reader(Cursor::new(payload.csv.into_bytes()))?;

    let mut imported = 0;
    let mut skipped = Vec::new();
    for product in products {
        let id = product.id.clone();
        match catalog.repository().insert(product) {
            Ok(_) => imported += 1,
            Err(RepositoryError::Conflict) => skipped.push(id),
            Err(error) => {
                warn!(product_id = %id, %error, "catalog import aborted");
                let body = Json(json!({ "error": error.to_string() }));
                return Ok((StatusCode::INTERNAL_SERVER_ERROR, body).into_response());
            }
        }
    }

    info!(imported, skipped = skipped.len(), "catalog import finished");
    let body = Json(CatalogImportResponse { imported, skipped });
    Ok((StatusCode::OK, body).into_response())
}

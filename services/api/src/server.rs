use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCardRepository, InMemoryProductRepository};
use crate::routes::{with_storefront_routes, Storefront};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use forever_style::config::AppConfig;
use forever_style::error::AppError;
use forever_style::telemetry;
use forever_style::workflows::catalog::seed::sample_products;
use forever_style::workflows::catalog::{CatalogImporter, CatalogService};
use forever_style::workflows::payment::CardWalletService;
use forever_style::workflows::quiz::StyleQuiz;
use forever_style::workflows::stylist::{KeywordStylist, MockModelConverter, StylistState};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let products = match &config.storefront.catalog_csv {
        Some(path) => {
            let products = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), count = products.len(), "catalog seeded from CSV");
            products
        }
        None => sample_products(),
    };
    let stylist = KeywordStylist::from_catalog(&products);
    let product_repository = Arc::new(InMemoryProductRepository::seeded(products));

    let converter = Arc::new(MockModelConverter::new(
        config.storefront.model_conversion_delay,
    ));
    let storefront = Storefront {
        catalog: Arc::new(CatalogService::new(product_repository)),
        quiz: Arc::new(StyleQuiz::standard()),
        wallet: Arc::new(CardWalletService::new(Arc::new(
            InMemoryCardRepository::default(),
        ))),
        stylist: Arc::new(StylistState::new(stylist, converter)),
    };

    let app = with_storefront_routes(storefront)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "storefront service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

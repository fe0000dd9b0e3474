use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

pub const SAMPLE_MODEL_URL: &str = "https://models.readyplayer.me/65a0d1d154429befc7f85923.glb";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("image url must not be blank")]
    MissingImage,
    #[error("conversion backend failed: {0}")]
    Backend(String),
}

/// Turns a product photo into a downloadable 3D model.
#[async_trait]
pub trait ModelConverter: Send + Sync {
    async fn convert(&self, image_url: &str) -> Result<String, ConversionError>;
}

/// Simulated converter: waits, then hands back a fixed sample model.
#[derive(Debug, Clone)]
pub struct MockModelConverter {
    delay: Duration,
    model_url: String,
}

impl MockModelConverter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            model_url: SAMPLE_MODEL_URL.to_string(),
        }
    }

    pub fn with_model_url(mut self, model_url: impl Into<String>) -> Self {
        self.model_url = model_url.into();
        self
    }
}

#[async_trait]
impl ModelConverter for MockModelConverter {
    async fn convert(&self, image_url: &str) -> Result<String, ConversionError> {
        if image_url.trim().is_empty() {
            return Err(ConversionError::MissingImage);
        }
        tokio::time::sleep(self.delay).await;
        Ok(self.model_url.clone())
    }
}

/// Run a conversion, logging and swallowing failures the way the product
/// page expects: a model URL or nothing.
pub async fn convert_image_to_3d<C>(converter: &C, image_url: &str) -> Option<String>
where
    C: ModelConverter + ?Sized,
{
    info!(%image_url, "3D conversion initiated");
    match converter.convert(image_url).await {
        Ok(model_url) => {
            info!(%model_url, "3D conversion complete");
            Some(model_url)
        }
        Err(error) => {
            warn!(%image_url, %error, "3D conversion failed");
            None
        }
    }
}

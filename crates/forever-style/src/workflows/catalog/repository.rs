use super::domain::{Product, ProductId};

/// Storage abstraction over the hosted product table.
///
/// `list` returns the most recently inserted products first, matching the
/// storefront's "newest arrivals" ordering.
pub trait ProductRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError>;
    fn insert(&self, product: Product) -> Result<Product, RepositoryError>;
    fn update(&self, product: Product) -> Result<(), RepositoryError>;
    fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

//! Product catalog: the storefront's product records behind an injected
//! repository, plus search, admin edits and CSV seeding.

pub mod domain;
mod import;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{discounted_price, NewProduct, Product, ProductId, ProductStatus, ProductSummary};
pub use import::{CatalogImportError, CatalogImporter};
pub use repository::{ProductRepository, RepositoryError};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceError, ProductValidationError};

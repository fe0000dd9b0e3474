use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{NewProduct, Product, ProductId};
use super::repository::{ProductRepository, RepositoryError};

/// Catalog facade over an injected product repository.
pub struct CatalogService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> CatalogService<R>
where
    R: ProductRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// All products, newest first.
    pub fn list(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &ProductId) -> Result<Product, CatalogServiceError> {
        let product = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(product)
    }

    /// Case-insensitive substring search over name, category and subcategory.
    pub fn search(&self, query: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let needle = query.trim().to_lowercase();
        let products = self.repository.list()?;
        if needle.is_empty() {
            return Ok(products);
        }

        Ok(products
            .into_iter()
            .filter(|product| product.search_terms().contains(&needle))
            .collect())
    }

    pub fn by_category(&self, category: &str) -> Result<Vec<Product>, CatalogServiceError> {
        let category = category.trim();
        Ok(self
            .repository
            .list()?
            .into_iter()
            .filter(|product| product.category.eq_ignore_ascii_case(category))
            .collect())
    }

    /// Validate and store a new product under the next free `prod<N>` id.
    ///
    /// Sequential ids can only collide with rows already stored, so the
    /// insert is attempted at most once per existing row plus one before the
    /// conflict is reported.
    pub fn add_product(&self, submission: NewProduct) -> Result<Product, CatalogServiceError> {
        validate(&submission)?;

        let attempts = self.repository.list()?.len() + 1;
        for _ in 0..attempts {
            let id = self.next_id();
            match self.repository.insert(submission.clone().into_product(id)) {
                Ok(stored) => {
                    info!(product_id = %stored.id, name = %stored.name, "product added to catalog");
                    return Ok(stored);
                }
                Err(RepositoryError::Conflict) => continue,
                Err(other) => return Err(other.into()),
            }
        }

        warn!(attempts, name = %submission.name, "no free product id found");
        Err(RepositoryError::Conflict.into())
    }

    /// Flip between Active and Out of Stock, resetting stock to match.
    pub fn toggle_status(&self, id: &ProductId) -> Result<Product, CatalogServiceError> {
        let mut product = self.get(id)?;
        product.status = product.status.toggled();
        product.stock = product.status.restock_level();
        self.repository.update(product.clone())?;

        info!(product_id = %product.id, status = product.status.label(), "product status toggled");
        Ok(product)
    }

    pub fn delete(&self, id: &ProductId) -> Result<(), CatalogServiceError> {
        self.repository.delete(id)?;
        info!(product_id = %id, "product removed from catalog");
        Ok(())
    }

    fn next_id(&self) -> ProductId {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        ProductId(format!("prod{n}"))
    }
}

fn validate(submission: &NewProduct) -> Result<(), ProductValidationError> {
    if submission.name.trim().is_empty() {
        return Err(ProductValidationError::MissingName);
    }
    if submission.price == 0 {
        return Err(ProductValidationError::MissingPrice);
    }
    if submission.discount_percentage > 100 {
        return Err(ProductValidationError::DiscountOutOfRange(
            submission.discount_percentage,
        ));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("product name is required")]
    MissingName,
    #[error("product price must be greater than zero")]
    MissingPrice,
    #[error("discount percentage must be between 0 and 100 (found {0})")]
    DiscountOutOfRange(u8),
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Invalid(#[from] ProductValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

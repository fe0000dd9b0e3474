use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::domain::{NewProduct, Product, ProductId, ProductStatus};
use crate::workflows::catalog::repository::{ProductRepository, RepositoryError};
use crate::workflows::catalog::seed::sample_products;
use crate::workflows::catalog::service::CatalogService;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        let repository = Self::default();
        for product in sample_products() {
            repository.insert(product).expect("seed inserts");
        }
        repository
    }
}

impl ProductRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let guard = self.products.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }

    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let guard = self.products.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|product| &product.id == id).cloned())
    }

    fn insert(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut guard = self.products.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == product.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(product.clone());
        Ok(product)
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        let mut guard = self.products.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut guard = self.products.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|product| &product.id != id);
        if guard.len() == before {
            Err(RepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

/// Seeded catalog that refuses every insert as a duplicate id.
pub(super) struct ConflictingRepository {
    inner: MemoryRepository,
    pub(super) attempts: AtomicUsize,
}

impl ConflictingRepository {
    pub(super) fn seeded() -> Self {
        Self {
            inner: MemoryRepository::seeded(),
            attempts: AtomicUsize::new(0),
        }
    }
}

impl ProductRepository for ConflictingRepository {
    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.inner.list()
    }

    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn insert(&self, _product: Product) -> Result<Product, RepositoryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::Conflict)
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        self.inner.update(product)
    }

    fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.inner.delete(id)
    }
}

pub(super) fn seeded_service() -> (Arc<MemoryRepository>, Arc<CatalogService<MemoryRepository>>) {
    let repository = Arc::new(MemoryRepository::seeded());
    let service = Arc::new(CatalogService::new(repository.clone()));
    (repository, service)
}

pub(super) fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        image: "https://example.test/kurta.jpg".to_string(),
        price: 1400,
        discount_percentage: 10,
        category: "Men's".to_string(),
        subcategory: "Ethnicwear".to_string(),
        description: Some("Breathable linen kurta".to_string()),
        sizes: vec!["M".to_string(), "L".to_string()],
        stock: 12,
        rating: None,
        status: ProductStatus::Active,
    }
}

pub(super) fn json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    match body {
        Some(value) => builder
            .body(Body::from(value.to_string()))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    }
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let value = serde_json::from_slice(&bytes).expect("valid json body");
    (status, value)
}

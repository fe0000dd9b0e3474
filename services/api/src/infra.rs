use chrono::NaiveDate;
use forever_style::workflows::catalog::{Product, ProductId, ProductRepository, RepositoryError};
use forever_style::workflows::payment::{
    CardId, CardRepository, CardRepositoryError, SavedCard, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    mutex.lock().map_err(|_| "in-memory store poisoned".to_string())
}

/// Insertion-ordered product store; `list` reports newest first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProductRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Load a seed listing, skipping rows whose id was already seen.
    pub(crate) fn seeded(products: Vec<Product>) -> Self {
        let repository = Self::default();
        for product in products {
            let id = product.id.clone();
            if let Err(error) = repository.insert(product) {
                warn!(product_id = %id, %error, "skipping catalog seed row");
            }
        }
        repository
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let guard = lock(&self.products).map_err(RepositoryError::Unavailable)?;
        Ok(guard.iter().rev().cloned().collect())
    }

    fn fetch(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let guard = lock(&self.products).map_err(RepositoryError::Unavailable)?;
        Ok(guard.iter().find(|product| &product.id == id).cloned())
    }

    fn insert(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut guard = lock(&self.products).map_err(RepositoryError::Unavailable)?;
        if guard.iter().any(|existing| existing.id == product.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(product.clone());
        Ok(product)
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.products).map_err(RepositoryError::Unavailable)?;
        match guard.iter_mut().find(|existing| existing.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.products).map_err(RepositoryError::Unavailable)?;
        let before = guard.len();
        guard.retain(|product| &product.id != id);
        if guard.len() == before {
            Err(RepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCardRepository {
    cards: Arc<Mutex<HashMap<CardId, SavedCard>>>,
}

impl CardRepository for InMemoryCardRepository {
    fn insert(&self, card: SavedCard) -> Result<SavedCard, CardRepositoryError> {
        let mut guard = lock(&self.cards).map_err(CardRepositoryError::Unavailable)?;
        if guard.contains_key(&card.id) {
            return Err(CardRepositoryError::Conflict);
        }
        guard.insert(card.id.clone(), card.clone());
        Ok(card)
    }

    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedCard>, CardRepositoryError> {
        let guard = lock(&self.cards).map_err(CardRepositoryError::Unavailable)?;
        let mut cards: Vec<SavedCard> = guard
            .values()
            .filter(|card| &card.user_id == user_id)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(cards)
    }

    fn fetch(&self, id: &CardId) -> Result<Option<SavedCard>, CardRepositoryError> {
        let guard = lock(&self.cards).map_err(CardRepositoryError::Unavailable)?;
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &CardId) -> Result<(), CardRepositoryError> {
        let mut guard = lock(&self.cards).map_err(CardRepositoryError::Unavailable)?;
        guard
            .remove(id)
            .map(|_| ())
            .ok_or(CardRepositoryError::NotFound)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

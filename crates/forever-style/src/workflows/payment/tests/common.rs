use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::payment::wallet::{
    CardId, CardRepository, CardRepositoryError, CardSubmission, CardWalletService, SavedCard,
    UserId,
};

#[derive(Default, Clone)]
pub(super) struct MemoryCards {
    cards: Arc<Mutex<BTreeMap<String, SavedCard>>>,
}

impl MemoryCards {
    pub(super) fn stored(&self) -> Vec<SavedCard> {
        self.cards
            .lock()
            .expect("card mutex poisoned")
            .values()
            .cloned()
            .collect()
    }
}

impl CardRepository for MemoryCards {
    fn insert(&self, card: SavedCard) -> Result<SavedCard, CardRepositoryError> {
        let mut guard = self.cards.lock().expect("card mutex poisoned");
        if guard.contains_key(&card.id.0) {
            return Err(CardRepositoryError::Conflict);
        }
        guard.insert(card.id.0.clone(), card.clone());
        Ok(card)
    }

    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedCard>, CardRepositoryError> {
        let guard = self.cards.lock().expect("card mutex poisoned");
        Ok(guard
            .values()
            .filter(|card| &card.user_id == user_id)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &CardId) -> Result<Option<SavedCard>, CardRepositoryError> {
        let guard = self.cards.lock().expect("card mutex poisoned");
        Ok(guard.get(&id.0).cloned())
    }

    fn delete(&self, id: &CardId) -> Result<(), CardRepositoryError> {
        let mut guard = self.cards.lock().expect("card mutex poisoned");
        guard
            .remove(&id.0)
            .map(|_| ())
            .ok_or(CardRepositoryError::NotFound)
    }
}

/// Store whose id space is exhausted: every insert collides.
#[derive(Default)]
pub(super) struct ConflictingCards {
    pub(super) attempts: AtomicUsize,
}

impl CardRepository for ConflictingCards {
    fn insert(&self, _card: SavedCard) -> Result<SavedCard, CardRepositoryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CardRepositoryError::Conflict)
    }

    fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<SavedCard>, CardRepositoryError> {
        Ok(Vec::new())
    }

    fn fetch(&self, _id: &CardId) -> Result<Option<SavedCard>, CardRepositoryError> {
        Ok(None)
    }

    fn delete(&self, _id: &CardId) -> Result<(), CardRepositoryError> {
        Err(CardRepositoryError::NotFound)
    }
}

pub(super) fn wallet() -> (Arc<MemoryCards>, Arc<CardWalletService<MemoryCards>>) {
    let repository = Arc::new(MemoryCards::default());
    let service = Arc::new(CardWalletService::new(repository.clone()));
    (repository, service)
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn user(id: &str) -> UserId {
    UserId(id.to_string())
}

pub(super) fn submission(number: &str, expiry: &str) -> CardSubmission {
    CardSubmission {
        card_number: number.to_string(),
        card_holder_name: "Asha Rao".to_string(),
        expiry_date: expiry.to_string(),
    }
}

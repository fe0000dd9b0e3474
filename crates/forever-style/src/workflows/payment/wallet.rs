use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::card::{brand_label, card_digits, classify_card_brand, mask_card_number};
use super::expiry::is_valid_expiry;

const MIN_CARD_DIGITS: usize = 12;
const MAX_CARD_DIGITS: usize = 19;
/// Insert attempts before a repeated conflict is reported to the caller.
const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

/// Card details as typed into the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSubmission {
    pub card_number: String,
    pub card_holder_name: String,
    pub expiry_date: String,
}

/// Stored card row. `card_number` holds digits only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub id: CardId,
    pub user_id: UserId,
    pub card_number: String,
    pub card_holder_name: String,
    pub expiry_date: String,
}

impl SavedCard {
    pub fn view(&self) -> SavedCardView {
        SavedCardView {
            id: self.id.clone(),
            masked_number: mask_card_number(&self.card_number),
            card_holder_name: self.card_holder_name.clone(),
            expiry_date: self.expiry_date.clone(),
            brand_label: brand_label(classify_card_brand(&self.card_number)),
        }
    }
}

/// What the profile page is allowed to see of a stored card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedCardView {
    pub id: CardId,
    pub masked_number: String,
    pub card_holder_name: String,
    pub expiry_date: String,
    pub brand_label: &'static str,
}

/// Storage abstraction over the hosted `bank_cards` table.
pub trait CardRepository: Send + Sync {
    fn insert(&self, card: SavedCard) -> Result<SavedCard, CardRepositoryError>;
    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedCard>, CardRepositoryError>;
    fn fetch(&self, id: &CardId) -> Result<Option<SavedCard>, CardRepositoryError>;
    fn delete(&self, id: &CardId) -> Result<(), CardRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CardRepositoryError {
    #[error("card already exists")]
    Conflict,
    #[error("card not found")]
    NotFound,
    #[error("card storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardValidationError {
    #[error("card holder name is required")]
    MissingHolderName,
    #[error("card number must have between 12 and 19 digits (found {0})")]
    InvalidNumberLength(usize),
    #[error("expiry date '{0}' is malformed or already past")]
    InvalidExpiry(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error(transparent)]
    Invalid(#[from] CardValidationError),
    #[error(transparent)]
    Repository(#[from] CardRepositoryError),
}

/// Saved-card facade for the profile page.
pub struct CardWalletService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> CardWalletService<R>
where
    R: CardRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn add_card(
        &self,
        user_id: &UserId,
        submission: CardSubmission,
        today: NaiveDate,
    ) -> Result<SavedCardView, WalletError> {
        let card_holder_name = submission.card_holder_name.trim().to_string();
        if card_holder_name.is_empty() {
            return Err(CardValidationError::MissingHolderName.into());
        }

        let digits = card_digits(&submission.card_number);
        if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
            return Err(CardValidationError::InvalidNumberLength(digits.len()).into());
        }

        let expiry_date = submission.expiry_date.trim().to_string();
        if !is_valid_expiry(&expiry_date, today) {
            return Err(CardValidationError::InvalidExpiry(expiry_date).into());
        }

        let mut stored = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let card = SavedCard {
                id: self.next_id(),
                user_id: user_id.clone(),
                card_number: digits.clone(),
                card_holder_name: card_holder_name.clone(),
                expiry_date: expiry_date.clone(),
            };
            match self.repository.insert(card) {
                Ok(card) => {
                    stored = Some(card);
                    break;
                }
                Err(CardRepositoryError::Conflict) => continue,
                Err(other) => return Err(other.into()),
            }
        }
        let Some(stored) = stored else {
            warn!(user_id = %user_id.0, attempts = MAX_ID_ATTEMPTS, "card insert kept conflicting");
            return Err(CardRepositoryError::Conflict.into());
        };

        let view = stored.view();
        info!(
            user_id = %user_id.0,
            card_id = %view.id.0,
            brand = view.brand_label,
            "card saved to wallet"
        );
        Ok(view)
    }

    pub fn cards(&self, user_id: &UserId) -> Result<Vec<SavedCardView>, WalletError> {
        let cards = self.repository.list_for_user(user_id)?;
        Ok(cards.iter().map(SavedCard::view).collect())
    }

    /// Delete a card, treating other users' cards as missing.
    pub fn remove(&self, user_id: &UserId, card_id: &CardId) -> Result<(), WalletError> {
        match self.repository.fetch(card_id)? {
            Some(card) if &card.user_id == user_id => {
                self.repository.delete(card_id)?;
                info!(user_id = %user_id.0, card_id = %card_id.0, "card removed from wallet");
                Ok(())
            }
            Some(_) => {
                debug!(user_id = %user_id.0, card_id = %card_id.0, "refused to remove another user's card");
                Err(CardRepositoryError::NotFound.into())
            }
            None => Err(CardRepositoryError::NotFound.into()),
        }
    }

    fn next_id(&self) -> CardId {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        CardId(format!("card-{n:06}"))
    }
}

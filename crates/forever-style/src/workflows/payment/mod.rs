//! Payment card helpers for checkout and the profile wallet.

pub mod card;
pub mod expiry;
pub mod router;
pub mod wallet;

#[cfg(test)]
mod tests;

pub use card::{
    brand_label, classify_card_brand, format_card_number, mask_card_number, CardBrand,
    CardNumberInput,
};
pub use expiry::{format_expiry_input, is_valid_expiry, ExpiryInput};
pub use router::{inspect_card, payment_router, CardInspectionRequest, CardInspectionResponse};
pub use wallet::{
    CardId, CardRepository, CardRepositoryError, CardSubmission, CardValidationError,
    CardWalletService, SavedCard, SavedCardView, UserId, WalletError,
};

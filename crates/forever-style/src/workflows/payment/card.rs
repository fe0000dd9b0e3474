use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::error;

/// Display cap for a formatted card number: 16 digits plus 3 separators.
pub const FORMATTED_CARD_MAX_LEN: usize = 19;

const UNRECOGNIZED_LABEL: &str = "Credit Card";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    RuPay,
}

impl CardBrand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::RuPay => "RuPay",
        }
    }
}

/// Label for card tiles, falling back to a generic name.
pub fn brand_label(brand: Option<CardBrand>) -> &'static str {
    brand.map(CardBrand::label).unwrap_or(UNRECOGNIZED_LABEL)
}

struct BrandRule {
    pattern: Regex,
    brand: CardBrand,
}

/// Network prefixes in match order.
const BRAND_PATTERNS: [(&str, CardBrand); 4] = [
    (r"^4", CardBrand::Visa),
    (r"^5[1-5]", CardBrand::Mastercard),
    (r"^6[0-9]{15}$", CardBrand::RuPay),
    (r"^8[1-5][0-9]{14}$", CardBrand::RuPay),
];

fn brand_rules() -> &'static [BrandRule] {
    static RULES: OnceLock<Vec<BrandRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let mut rules = Vec::with_capacity(BRAND_PATTERNS.len());
        for (source, brand) in BRAND_PATTERNS {
            match Regex::new(source) {
                Ok(pattern) => rules.push(BrandRule { pattern, brand }),
                Err(error) => {
                    error!(pattern = source, ?brand, %error, "card brand rule failed to compile");
                }
            }
        }
        rules
    })
}

/// Strip everything but ASCII digits.
pub fn card_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Map a card number to its network; first matching rule wins.
pub fn classify_card_brand(raw: &str) -> Option<CardBrand> {
    let digits = card_digits(raw);
    brand_rules()
        .iter()
        .find(|rule| rule.pattern.is_match(&digits))
        .map(|rule| rule.brand)
}

/// Group the digits in fours separated by single spaces.
pub fn format_card_number(raw: &str) -> String {
    let digits = card_digits(raw);
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 4);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && index % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted
}

/// `XXXX XXXX XXXX 1234` style mask showing only the last four digits.
pub fn mask_card_number(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let skip = cleaned.chars().count().saturating_sub(4);
    let last_four: String = cleaned.chars().skip(skip).collect();
    format!("XXXX XXXX XXXX {last_four}")
}

/// Live state of the card number field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardNumberInput {
    pub digits: String,
    pub formatted: String,
    pub detected_brand: Option<CardBrand>,
}

impl CardNumberInput {
    pub fn from_raw(raw: &str) -> Self {
        let mut formatted = format_card_number(raw);
        formatted.truncate(FORMATTED_CARD_MAX_LEN);
        let digits = card_digits(&formatted);
        let detected_brand = classify_card_brand(&digits);

        Self {
            digits,
            formatted,
            detected_brand,
        }
    }
}

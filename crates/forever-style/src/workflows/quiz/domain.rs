use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::workflows::catalog::ProductSummary;

/// Aesthetic family a quiz answer votes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleCategory {
    Classic,
    Casual,
    Bold,
    Minimalist,
    AvantGarde,
    Edgy,
    Romantic,
}

impl StyleCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Classic,
            Self::Casual,
            Self::Bold,
            Self::Minimalist,
            Self::AvantGarde,
            Self::Edgy,
            Self::Romantic,
        ]
    }

    /// Wire tag, e.g. `avant-garde`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Casual => "casual",
            Self::Bold => "bold",
            Self::Minimalist => "minimalist",
            Self::AvantGarde => "avant-garde",
            Self::Edgy => "edgy",
            Self::Romantic => "romantic",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style category '{0}'")]
pub struct UnknownStyleCategory(pub String);

impl FromStr for StyleCategory {
    type Err = UnknownStyleCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ordered()
            .into_iter()
            .find(|category| category.tag() == normalized)
            .ok_or_else(|| UnknownStyleCategory(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub style_tag: StyleCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// Result card shown once the quiz completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub category: StyleCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: Vec<ProductSummary>,
}

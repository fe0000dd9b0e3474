use serde::Serialize;

use crate::workflows::catalog::{Product, ProductSummary};

pub const WELCOME_MESSAGE: &str = "Hi there! I'm your AI Fashion Stylist. How can I help you today? You can ask me about outfit ideas, style advice, or help finding specific products.";

const OUTFIT_REPLY: &str = "Based on current trends, I recommend these stylish outfit combinations. Would you like to see products for any of these looks?";
const STYLE_REPLY: &str = "Your personal style is unique to you! We have various style categories including Classic, Casual, Bold, Minimalist, and more. Have you taken our style quiz yet? It can help identify your fashion preferences.";
const ORDER_REPLY: &str = "To check your order status, please provide your order number or email address. I can help you track your package or address any concerns about your delivery.";
const FALLBACK_REPLY: &str = "Thank you for your question! I'd be happy to help with fashion advice, outfit ideas, or finding specific products in our collection. Could you give me more details about what you're looking for?";

const OUTFIT_PICKS: usize = 3;

/// Which canned answer a message triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StylistTopic {
    Outfit,
    Style,
    Order,
    General,
}

impl StylistTopic {
    /// Keyword groups are checked in order; the first hit decides.
    pub fn detect(message: &str) -> Self {
        let lowered = message.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|word| lowered.contains(word));

        if mentions(&["outfit", "wear"]) {
            Self::Outfit
        } else if mentions(&["style", "fashion"]) {
            Self::Style
        } else if mentions(&["order", "delivery"]) {
            Self::Order
        } else {
            Self::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylistReply {
    pub topic: StylistTopic,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylistError {
    #[error("message must not be blank")]
    EmptyMessage,
}

/// Keyword-matched stand-in for the AI stylist.
#[derive(Debug, Clone)]
pub struct KeywordStylist {
    recommendations: Vec<ProductSummary>,
}

impl KeywordStylist {
    /// Outfit replies recommend the first few products of `catalog`.
    pub fn from_catalog(catalog: &[Product]) -> Self {
        Self {
            recommendations: catalog
                .iter()
                .take(OUTFIT_PICKS)
                .map(Product::summary)
                .collect(),
        }
    }

    pub fn reply(&self, message: &str) -> Result<StylistReply, StylistError> {
        if message.trim().is_empty() {
            return Err(StylistError::EmptyMessage);
        }

        let topic = StylistTopic::detect(message);
        let (text, products) = match topic {
            StylistTopic::Outfit => (OUTFIT_REPLY, self.recommendations.clone()),
            StylistTopic::Style => (STYLE_REPLY, Vec::new()),
            StylistTopic::Order => (ORDER_REPLY, Vec::new()),
            StylistTopic::General => (FALLBACK_REPLY, Vec::new()),
        };

        Ok(StylistReply {
            topic,
            text,
            products,
        })
    }
}

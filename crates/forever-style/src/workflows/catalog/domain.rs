use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier such as `prod1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Active,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::OutOfStock,
            Self::OutOfStock => Self::Active,
        }
    }

    /// Stock level applied when an admin flips the status by hand.
    pub const fn restock_level(self) -> u32 {
        match self {
            Self::Active => 10,
            Self::OutOfStock => 0,
        }
    }
}

/// Full catalog record.
///
/// Field names are snake_case throughout; `discountPercentage` is still
/// accepted on input so older storefront payloads deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: u32,
    #[serde(default, alias = "discountPercentage")]
    pub discount_percentage: u8,
    pub category: String,
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    pub fn discounted_price(&self) -> u32 {
        discounted_price(self.price, self.discount_percentage)
    }

    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price,
            discount_percentage: self.discount_percentage,
        }
    }

    pub(crate) fn search_terms(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.subcategory).to_lowercase()
    }
}

/// Product payload submitted from the admin "add product" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub price: u32,
    #[serde(default, alias = "discountPercentage")]
    pub discount_percentage: u8,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub status: ProductStatus,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            discount_percentage: self.discount_percentage,
            category: self.category,
            subcategory: self.subcategory,
            description: self.description,
            sizes: self.sizes,
            stock: self.stock,
            rating: self.rating,
            status: self.status,
        }
    }
}

/// Card-sized view used by quiz and stylist recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: u32,
    #[serde(default, alias = "discountPercentage")]
    pub discount_percentage: u8,
}

impl ProductSummary {
    pub fn discounted_price(&self) -> u32 {
        discounted_price(self.price, self.discount_percentage)
    }
}

/// Price after discount, rounded to the nearest whole rupee.
pub fn discounted_price(price: u32, discount_percentage: u8) -> u32 {
    let pct = u64::from(discount_percentage.min(100));
    let scaled = u64::from(price) * (100 - pct);
    ((scaled + 50) / 100) as u32
}

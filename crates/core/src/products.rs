//! Products

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prices::Price;

/// Opaque unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

/// Catalog classification label, used for filtering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pottery and ceramics.
    Pottery,
    /// Textiles and weaving.
    Textiles,
    /// Jewelry and metalwork.
    Jewelry,
    /// Woodwork and carving.
    WoodArt,
}

impl Category {
    /// Human-readable label shown in the storefront.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Pottery => "Pottery",
            Category::Textiles => "Textiles",
            Category::Jewelry => "Jewelry",
            Category::WoodArt => "Wood Art",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a category filter label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pottery" => Ok(Category::Pottery),
            "textiles" => Ok(Category::Textiles),
            "jewelry" => Ok(Category::Jewelry),
            "wood_art" | "wood art" => Ok(Category::WoodArt),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Errors raised when validating catalog data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The pre-discount price is below the current price (product id).
    #[error("product {0} has an original price below its current price")]
    OriginalPriceBelowCurrent(String),
}

/// A purchasable catalog product.
///
/// Products are immutable, externally supplied values; the cart treats each
/// one as a snapshot taken at the time it is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Artisan who made the piece.
    pub artisan: String,

    /// Classification label.
    pub category: Category,

    /// Current unit price.
    pub price: Price,

    /// Pre-discount price, when the product is on sale. Must be at least
    /// the current price.
    pub original_price: Option<Price>,

    /// Product image URL.
    pub image: String,

    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    /// Recently added to the catalog.
    #[serde(default)]
    pub new: bool,

    /// Featured on the storefront.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Checks the pricing invariant on externally supplied product data.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::OriginalPriceBelowCurrent`] when a
    /// pre-discount price is lower than the current price.
    pub fn validate(&self) -> Result<(), ProductError> {
        match self.original_price {
            Some(original) if original < self.price => Err(
                ProductError::OriginalPriceBelowCurrent(self.id.to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Rounded percentage saved against the pre-discount price, or 0 when
    /// the product is not on sale.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        let Some(original) = self.original_price else {
            return 0;
        };

        let Some(saved) = original.minor().checked_sub(self.price.minor()) else {
            return 0;
        };

        if original.is_zero() {
            return 0;
        }

        let rounded = (saved * 100 + original.minor() / 2) / original.minor();

        u32::try_from(rounded).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl_set() -> Product {
        Product {
            id: ProductId::from("1"),
            name: "Handcrafted Ceramic Bowl Set".to_string(),
            artisan: "Maria Santos".to_string(),
            category: Category::Pottery,
            price: Price::from_major(89),
            original_price: Some(Price::from_major(120)),
            image: String::new(),
            rating: 4.9,
            reviews: 47,
            new: true,
            featured: true,
        }
    }

    #[test]
    fn discount_percent_rounds_against_original_price() {
        // (120 - 89) / 120 = 25.83%, rounded to 26.
        assert_eq!(bowl_set().discount_percent(), 26);
    }

    #[test]
    fn discount_percent_without_original_price_is_zero() {
        let product = Product {
            original_price: None,
            ..bowl_set()
        };

        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn validate_accepts_original_price_at_or_above_current() {
        assert!(bowl_set().validate().is_ok());
    }

    #[test]
    fn validate_rejects_original_price_below_current() {
        let product = Product {
            original_price: Some(Price::from_major(50)),
            ..bowl_set()
        };

        assert!(matches!(
            product.validate(),
            Err(ProductError::OriginalPriceBelowCurrent(_))
        ));
    }

    #[test]
    fn category_parses_filter_labels() {
        assert_eq!("pottery".parse(), Ok(Category::Pottery));
        assert_eq!("Wood Art".parse(), Ok(Category::WoodArt));
        assert!("macrame".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::WoodArt).unwrap_or_default();

        assert_eq!(json, "\"wood_art\"");
    }
}

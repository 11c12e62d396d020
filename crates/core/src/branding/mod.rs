//! Branding studio
//!
//! Structured brand-identity content for an artisan business: a tagline,
//! craft-keyed color palette, cultural story, product copy, social posts,
//! and translations into a fixed set of locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prices::Price;

pub mod templates;

/// Craft disciplines the branding studio knows how to style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Craft {
    /// Pottery and ceramics.
    Pottery,
    /// Textiles and weaving.
    Textiles,
    /// Jewelry and metalwork.
    Jewelry,
    /// Woodwork and carving.
    Woodwork,
    /// Traditional painting.
    Painting,
    /// Sculpture and carving.
    Sculpture,
    /// Embroidery and stitching.
    Embroidery,
    /// Basketry and weaving.
    Basketry,
    /// Glasswork and blowing.
    Glasswork,
    /// Any other traditional craft.
    #[default]
    Other,
}

impl Craft {
    /// The craft named in prose, e.g. "the timeless beauty of pottery".
    #[must_use]
    pub fn prose_label(self) -> &'static str {
        match self {
            Craft::Pottery => "pottery",
            Craft::Textiles => "textiles",
            Craft::Jewelry => "jewelry",
            Craft::Woodwork => "woodwork",
            Craft::Painting => "traditional painting",
            Craft::Sculpture => "sculpture",
            Craft::Embroidery => "embroidery",
            Craft::Basketry => "basketry",
            Craft::Glasswork => "glasswork",
            Craft::Other => "traditional crafts",
        }
    }

    /// Five-swatch color palette drawn from the craft's traditional
    /// materials. Crafts without a dedicated palette share a default.
    #[must_use]
    pub fn palette(self) -> [&'static str; 5] {
        match self {
            Craft::Pottery => ["#8B4513", "#D2691E", "#CD853F", "#F4A460", "#DEB887"],
            Craft::Textiles => ["#DC143C", "#FFD700", "#228B22", "#4169E1", "#8A2BE2"],
            Craft::Jewelry => ["#FFD700", "#C0C0C0", "#B87333", "#E6E6FA", "#FF6347"],
            Craft::Woodwork => ["#654321", "#8B4513", "#A0522D", "#D2691E", "#DEB887"],
            _ => ["#8B4513", "#D2691E", "#228B22", "#FFD700", "#DC143C"],
        }
    }
}

/// Error parsing a craft label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown craft: {0}")]
pub struct UnknownCraft(pub String);

impl FromStr for Craft {
    type Err = UnknownCraft;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pottery" => Ok(Craft::Pottery),
            "textiles" => Ok(Craft::Textiles),
            "jewelry" => Ok(Craft::Jewelry),
            "woodwork" => Ok(Craft::Woodwork),
            "painting" => Ok(Craft::Painting),
            "sculpture" => Ok(Craft::Sculpture),
            "embroidery" => Ok(Craft::Embroidery),
            "basketry" => Ok(Craft::Basketry),
            "glasswork" => Ok(Craft::Glasswork),
            "other" => Ok(Craft::Other),
            other => Err(UnknownCraft(other.to_string())),
        }
    }
}

/// Locales the studio can translate brand copy into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// Hindi.
    Hindi,
    /// Portuguese.
    Portuguese,
    /// Arabic.
    Arabic,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Locale::English => "English",
            Locale::Spanish => "Spanish",
            Locale::French => "French",
            Locale::Hindi => "Hindi",
            Locale::Portuguese => "Portuguese",
            Locale::Arabic => "Arabic",
        };

        f.write_str(name)
    }
}

/// Error parsing a locale label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Locale::English),
            "spanish" => Ok(Locale::Spanish),
            "french" => Ok(Locale::French),
            "hindi" => Ok(Locale::Hindi),
            "portuguese" => Ok(Locale::Portuguese),
            "arabic" => Ok(Locale::Arabic),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// What the artisan tells the studio about their business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingRequest {
    /// Business or artist name. Required; must not be blank.
    pub business_name: String,

    /// Craft discipline.
    #[serde(default)]
    pub craft: Craft,

    /// What the artisan makes, e.g. "Bowls" or "Scarves".
    #[serde(default)]
    pub product_type: Option<String>,

    /// Cultural tradition the work belongs to.
    #[serde(default)]
    pub cultural_background: Option<String>,

    /// The artisan's journey and inspiration, free text.
    #[serde(default)]
    pub story: Option<String>,

    /// Who the brand should speak to.
    #[serde(default)]
    pub target_market: Option<String>,

    /// Primary language for the brand.
    #[serde(default)]
    pub locale: Locale,
}

/// Inclusive suggested price range for a product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound.
    pub low: Price,

    /// Upper bound.
    pub high: Price,
}

/// Marketing copy for one product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCopy {
    /// Line name.
    pub name: String,

    /// Sales description.
    pub description: String,

    /// What the line means within the craft's heritage.
    pub cultural_significance: String,

    /// Suggested materials.
    pub materials: Vec<String>,

    /// Suggested pricing.
    pub price_range: PriceRange,
}

/// Brand copy rendered in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The locale this copy is written in.
    pub locale: Locale,

    /// Translated tagline.
    pub tagline: String,

    /// Translated description.
    pub description: String,
}

/// A complete generated brand identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingResult {
    /// Brand mark glyph.
    pub mark: String,

    /// Five hex color swatches.
    pub palette: Vec<String>,

    /// Brand tagline.
    pub tagline: String,

    /// Brand description.
    pub description: String,

    /// The brand's heritage narrative.
    pub cultural_story: String,

    /// Copy for each suggested product line.
    pub product_lines: Vec<ProductCopy>,

    /// Ready-to-post social media captions.
    pub social_posts: Vec<String>,

    /// Brand copy in additional locales.
    pub translations: Vec<Translation>,
}

/// Errors rejecting a branding request before generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrandingError {
    /// The business name was missing or blank.
    #[error("business name must not be blank")]
    EmptyBusinessName,
}

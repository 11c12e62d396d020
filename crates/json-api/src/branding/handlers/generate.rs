//! Generate Branding Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use artenact::branding::{
    BrandingRequest, BrandingResult, Craft, Locale, ProductCopy, Translation,
};

use crate::{branding::errors::into_status_error, extensions::*, state::State};

/// Generate Branding Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GenerateBrandingRequest {
    /// Business or artist name
    pub business_name: String,

    /// Craft discipline, e.g. "pottery" or "textiles"
    pub craft: Option<String>,

    /// What the artisan makes, e.g. "Bowls"
    pub product_type: Option<String>,

    /// Cultural tradition the work belongs to
    pub cultural_background: Option<String>,

    /// The artisan's journey and inspiration
    pub story: Option<String>,

    /// Who the brand should speak to
    pub target_market: Option<String>,

    /// Primary language, e.g. "english" or "spanish"
    pub language: Option<String>,
}

impl GenerateBrandingRequest {
    fn into_request(self) -> Result<BrandingRequest, StatusError> {
        let craft = self
            .craft
            .as_deref()
            .map(str::parse::<Craft>)
            .transpose()
            .or_400("could not parse craft")?
            .unwrap_or_default();

        let locale = self
            .language
            .as_deref()
            .map(str::parse::<Locale>)
            .transpose()
            .or_400("could not parse language")?
            .unwrap_or_default();

        Ok(BrandingRequest {
            business_name: self.business_name,
            craft,
            product_type: self.product_type,
            cultural_background: self.cultural_background,
            story: self.story,
            target_market: self.target_market,
            locale,
        })
    }
}

/// Branding Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandingResponse {
    /// Brand mark glyph
    pub mark: String,

    /// Five hex color swatches
    pub palette: Vec<String>,

    /// Brand tagline
    pub tagline: String,

    /// Brand description
    pub description: String,

    /// The brand's heritage narrative
    pub cultural_story: String,

    /// Copy for each suggested product line
    pub product_lines: Vec<ProductCopyResponse>,

    /// Ready-to-post social media captions
    pub social_posts: Vec<String>,

    /// Brand copy in additional locales
    pub translations: Vec<TranslationResponse>,
}

impl From<BrandingResult> for BrandingResponse {
    fn from(result: BrandingResult) -> Self {
        BrandingResponse {
            mark: result.mark,
            palette: result.palette,
            tagline: result.tagline,
            description: result.description,
            cultural_story: result.cultural_story,
            product_lines: result
                .product_lines
                .into_iter()
                .map(ProductCopyResponse::from)
                .collect(),
            social_posts: result.social_posts,
            translations: result
                .translations
                .into_iter()
                .map(TranslationResponse::from)
                .collect(),
        }
    }
}

/// Product Copy Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCopyResponse {
    /// Line name
    pub name: String,

    /// Sales description
    pub description: String,

    /// What the line means within the craft's heritage
    pub cultural_significance: String,

    /// Suggested materials
    pub materials: Vec<String>,

    /// Suggested price range lower bound, in cents
    pub price_low: u64,

    /// Suggested price range upper bound, in cents
    pub price_high: u64,
}

impl From<ProductCopy> for ProductCopyResponse {
    fn from(copy: ProductCopy) -> Self {
        ProductCopyResponse {
            name: copy.name,
            description: copy.description,
            cultural_significance: copy.cultural_significance,
            materials: copy.materials,
            price_low: copy.price_range.low.minor(),
            price_high: copy.price_range.high.minor(),
        }
    }
}

/// Translation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TranslationResponse {
    /// The locale the copy is written in
    pub locale: String,

    /// Translated tagline
    pub tagline: String,

    /// Translated description
    pub description: String,
}

impl From<Translation> for TranslationResponse {
    fn from(translation: Translation) -> Self {
        TranslationResponse {
            locale: translation.locale.to_string(),
            tagline: translation.tagline,
            description: translation.description,
        }
    }
}

/// Generate Branding Handler
///
/// Produces a complete brand identity for an artisan business. A failed
/// generation surfaces one error and applies nothing.
#[endpoint(
    tags("branding"),
    summary = "Generate Brand Identity",
    responses(
        (status_code = StatusCode::OK, description = "Generated brand identity"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Blank business name"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Brand generation failed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<GenerateBrandingRequest>,
    depot: &mut Depot,
) -> Result<Json<BrandingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner().into_request()?;

    let result = state
        .app
        .branding
        .generate(&request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(result.into()))
}

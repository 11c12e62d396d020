//! Remote branding generator.
//!
//! Delegates generation to an external generative-text service. The service
//! receives a structured prompt plus the raw request and must answer with a
//! complete branding result; anything else is surfaced as one error and
//! nothing is applied.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use artenact::branding::{BrandingRequest, BrandingResult, templates};

use crate::domain::branding::{
    errors::BrandingServiceError,
    service::BrandingGenerator,
};

const STORY_INSTRUCTIONS: &str = "You are a master storyteller and head curator for an \
exhibit at a world-renowned museum. Transform the artisan's details into a single, \
universally compelling brand narrative (around 150 words), following this five-part \
structure: 1. The Human Touch: begin with the artisan. 2. The Bridge to Tradition: \
link the work to the lineage of the craft. 3. The Soul of the Material: describe the \
unique materials. 4. The Symbol, Demystified: explain the meaning of the central \
symbol or pattern. 5. The Timeless Value: conclude by framing the work as a piece of \
history. Keep the tone evocative, poetic, and accessible, and do not invent facts \
beyond what the artisan provided.";

/// Settings for the remote generator.
#[derive(Debug, Clone)]
pub struct RemoteGeneratorConfig {
    /// Endpoint that accepts the generation request.
    pub endpoint: String,

    /// Optional bearer token for the endpoint.
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Generator that calls an external generative-text service over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteGenerator {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl RemoteGenerator {
    /// Builds a generator from its settings.
    ///
    /// # Errors
    ///
    /// Returns [`BrandingServiceError::Client`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: RemoteGeneratorConfig) -> Result<Self, BrandingServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(BrandingServiceError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            token: config.token,
        })
    }
}

/// Renders the instructions sent alongside the raw request.
fn generation_prompt(request: &BrandingRequest) -> String {
    let mut prompt = format!(
        "{STORY_INSTRUCTIONS}\n\nArtisan: {name}\nCraft: {craft}\nPrimary language: {locale}",
        name = request.business_name.trim(),
        craft = request.craft.prose_label(),
        locale = request.locale,
    );

    if let Some(product_type) = request.product_type.as_deref() {
        prompt.push_str("\nProducts: ");
        prompt.push_str(product_type);
    }

    if let Some(background) = request.cultural_background.as_deref() {
        prompt.push_str("\nCultural background: ");
        prompt.push_str(background);
    }

    if let Some(story) = request.story.as_deref() {
        prompt.push_str("\nIn the artisan's own words:\n");
        prompt.push_str(story);
    }

    if let Some(market) = request.target_market.as_deref() {
        prompt.push_str("\nTarget market: ");
        prompt.push_str(market);
    }

    prompt
}

#[async_trait]
impl BrandingGenerator for RemoteGenerator {
    async fn generate(
        &self,
        request: &BrandingRequest,
    ) -> Result<BrandingResult, BrandingServiceError> {
        // Reject requests the template path would reject, before any I/O.
        templates::fabricate(request)?;

        debug!(endpoint = %self.endpoint, "requesting remote brand generation");

        let mut http_request = self.http.post(&self.endpoint).json(&json!({
            "prompt": generation_prompt(request),
            "request": request,
        }));

        if let Some(token) = &self.token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await.map_err(|source| {
            error!("branding generation transport failure: {source}");

            BrandingServiceError::Transport(source)
        })?;

        let status = response.status();

        if !status.is_success() {
            error!("branding generation rejected with status {status}");

            return Err(BrandingServiceError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<BrandingResult>()
            .await
            .map_err(BrandingServiceError::MalformedResult)
    }
}

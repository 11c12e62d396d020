//! Branding Config

use clap::Args;

/// Branding generator settings.
///
/// When no API URL is configured the server falls back to offline template
/// fabrication.
#[derive(Debug, Args)]
pub struct BrandingConfig {
    /// Generative-text endpoint for brand generation
    #[arg(long, env = "BRANDING_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token for the generative-text endpoint
    #[arg(long, env = "BRANDING_API_TOKEN")]
    pub api_token: Option<String>,

    /// Timeout for generation requests, in seconds
    #[arg(long, env = "BRANDING_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

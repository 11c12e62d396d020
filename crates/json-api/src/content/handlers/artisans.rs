//! Artisans Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use artenact::content::Artisan;

use crate::{extensions::*, state::State};

/// Artisans Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ArtisansResponse {
    /// Featured artisan profiles
    pub artisans: Vec<ArtisanResponse>,
}

/// Artisan Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ArtisanResponse {
    /// The unique identifier of the artisan
    pub id: String,

    /// Artisan name
    pub name: String,

    /// Primary craft
    pub craft: String,

    /// Where they work
    pub location: String,

    /// Portrait image URL
    pub image: String,

    /// Short biography
    pub bio: String,
}

impl From<Artisan> for ArtisanResponse {
    fn from(artisan: Artisan) -> Self {
        ArtisanResponse {
            id: artisan.id,
            name: artisan.name,
            craft: artisan.craft,
            location: artisan.location,
            image: artisan.image,
            bio: artisan.bio,
        }
    }
}

/// Artisans Handler
///
/// Returns the featured artisan profiles.
#[endpoint(tags("content"), summary = "List Artisans")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ArtisansResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(ArtisansResponse {
        artisans: state
            .app
            .content
            .artisans()
            .iter()
            .cloned()
            .map(ArtisanResponse::from)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::content_service;

    use super::*;

    #[tokio::test]
    async fn test_artisans_listing() -> TestResult {
        let service = content_service(Router::with_path("artisans").get(handler));

        let response: ArtisansResponse = TestClient::get("http://example.com/artisans")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(!response.artisans.is_empty());

        Ok(())
    }
}

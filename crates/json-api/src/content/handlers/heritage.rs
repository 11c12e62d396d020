//! Heritage Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use artenact::content::HeritageItem;

use crate::{content::events::serde_label, extensions::*, state::State};

/// Heritage Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HeritageResponse {
    /// Entries in the heritage capsule archive
    pub items: Vec<HeritageItemResponse>,
}

/// Heritage Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HeritageItemResponse {
    /// The unique identifier of the entry
    pub id: String,

    /// Entry title
    pub title: String,

    /// Kind of entry, e.g. "technique" or "tradition"
    pub kind: String,

    /// Contributing artisan
    pub artisan: String,

    /// Where the tradition lives
    pub location: String,

    /// Cultural tradition
    pub culture: String,

    /// View count
    pub views: u32,

    /// Like count
    pub likes: u32,

    /// Watch/read duration
    pub duration: String,

    /// Cover image URL
    pub image: String,

    /// Teaser shown in listings
    pub preview: String,

    /// Search tags
    pub tags: Vec<String>,

    /// Verified by the curation team
    pub verified: bool,
}

impl From<HeritageItem> for HeritageItemResponse {
    fn from(item: HeritageItem) -> Self {
        let kind = serde_label(&item.kind);

        HeritageItemResponse {
            id: item.id,
            title: item.title,
            kind,
            artisan: item.artisan,
            location: item.location,
            culture: item.culture,
            views: item.views,
            likes: item.likes,
            duration: item.duration,
            image: item.image,
            preview: item.preview,
            tags: item.tags,
            verified: item.verified,
        }
    }
}

/// Heritage Handler
///
/// Returns the heritage capsule archive.
#[endpoint(tags("content"), summary = "List Heritage Entries")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HeritageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HeritageResponse {
        items: state
            .app
            .content
            .heritage()
            .iter()
            .cloned()
            .map(HeritageItemResponse::from)
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
    async fn test_heritage_listing() -> TestResult {
        let service = content_service(Router::with_path("heritage").get(handler));

        let response: HeritageResponse = TestClient::get("http://example.com/heritage")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(!response.items.is_empty());
        assert!(
            response.items.iter().all(|item| !item.kind.is_empty()),
            "every entry carries a kind label"
        );

        Ok(())
    }
}

//! Stories Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use artenact::content::Story;

use crate::{extensions::*, state::State};

/// Stories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoriesResponse {
    /// Living stories from artisans
    pub stories: Vec<StoryResponse>,
}

/// Story Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoryResponse {
    /// The unique identifier of the story
    pub id: String,

    /// Story title
    pub title: String,

    /// The artisan telling the story
    pub artisan: String,

    /// Where the artisan works
    pub location: String,

    /// Cultural tradition
    pub culture: String,

    /// Craft discipline the story is about
    pub craft: String,

    /// Teaser shown in listings
    pub excerpt: String,

    /// Full story text
    pub content: String,

    /// Cover image URL
    pub image: String,

    /// Estimated reading time
    pub duration: String,

    /// Search tags
    pub tags: Vec<String>,

    /// Highlighted in the story browser
    pub featured: bool,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        StoryResponse {
            id: story.id,
            title: story.title,
            artisan: story.artisan,
            location: story.location,
            culture: story.culture,
            craft: story.craft,
            excerpt: story.excerpt,
            content: story.content,
            image: story.image,
            duration: story.duration,
            tags: story.tags,
            featured: story.featured,
        }
    }
}

/// Stories Handler
///
/// Returns the living stories collection.
#[endpoint(tags("content"), summary = "List Stories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(StoriesResponse {
        stories: state
            .app
            .content
            .stories()
            .iter()
            .cloned()
            .map(StoryResponse::from)
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
    async fn test_stories_listing() -> TestResult {
        let service = content_service(Router::with_path("stories").get(handler));

        let response: StoriesResponse = TestClient::get("http://example.com/stories")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(!response.stories.is_empty());
        assert!(
            response.stories.iter().any(|story| story.featured),
            "expected at least one featured story"
        );

        Ok(())
    }
}

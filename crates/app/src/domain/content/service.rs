//! Content service.

use artenact::{
    content::{Artisan, Event, HeritageItem, Story},
    fixtures,
};

/// Serves the storefront's editorial collections. The data is fixed for
/// the lifetime of the process, so no trait seam is needed.
#[derive(Debug, Clone)]
pub struct ContentService {
    events: Vec<Event>,
    stories: Vec<Story>,
    heritage: Vec<HeritageItem>,
    artisans: Vec<Artisan>,
}

impl ContentService {
    /// The storefront collections.
    #[must_use]
    pub fn storefront() -> Self {
        Self {
            events: fixtures::events(),
            stories: fixtures::stories(),
            heritage: fixtures::heritage_items(),
            artisans: fixtures::artisans(),
        }
    }

    /// Events on the calendar.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Living stories.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Heritage capsule entries.
    #[must_use]
    pub fn heritage(&self) -> &[HeritageItem] {
        &self.heritage
    }

    /// Featured artisan profiles.
    #[must_use]
    pub fn artisans(&self) -> &[Artisan] {
        &self.artisans
    }
}

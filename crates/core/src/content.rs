//! Storefront content
//!
//! Read-only editorial collections shown alongside the catalog: community
//! events, living stories, heritage entries, and featured artisans.

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// What kind of gathering an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Hands-on session led by an artisan.
    Workshop,
    /// Multi-day cultural celebration.
    Festival,
    /// Curated display of finished work.
    Exhibition,
    /// Open marketplace day.
    Market,
    /// Live music, dance, or storytelling.
    Performance,
}

/// A community event on the storefront calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: String,

    /// Event title.
    pub title: String,

    /// Kind of gathering.
    pub kind: EventKind,

    /// Calendar date, ISO `YYYY-MM-DD`.
    pub date: String,

    /// Human-readable time window.
    pub time: String,

    /// Venue.
    pub location: String,

    /// Hosting artisan.
    pub artisan: String,

    /// Cultural tradition represented.
    pub culture: String,

    /// Long-form description.
    pub description: String,

    /// Cover image URL.
    pub image: String,

    /// Admission price; `None` means free entry.
    pub admission: Option<Price>,

    /// Maximum attendance.
    pub capacity: u32,

    /// Attendees registered so far.
    pub registered: u32,

    /// Search tags.
    pub tags: Vec<String>,

    /// Highlighted on the calendar.
    pub featured: bool,
}

impl Event {
    /// Seats still available, zero when overbooked.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    /// Whether registration has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.registered >= self.capacity
    }
}

/// A long-form first-person story from an artisan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier.
    pub id: String,

    /// Story title.
    pub title: String,

    /// The artisan telling the story.
    pub artisan: String,

    /// Where the artisan works.
    pub location: String,

    /// Cultural tradition.
    pub culture: String,

    /// Craft discipline the story is about.
    pub craft: String,

    /// Teaser shown in listings.
    pub excerpt: String,

    /// Full story text.
    pub content: String,

    /// Cover image URL.
    pub image: String,

    /// Estimated reading time, e.g. "8 min read".
    pub duration: String,

    /// Search tags.
    pub tags: Vec<String>,

    /// Highlighted in the story browser.
    pub featured: bool,
}

/// What kind of heritage entry a capsule item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeritageKind {
    /// Personal or family narrative.
    Story,
    /// Documented craft technique.
    Technique,
    /// Historical background piece.
    History,
    /// Living tradition or ritual.
    Tradition,
}

/// An entry in the heritage capsule archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageItem {
    /// Unique identifier.
    pub id: String,

    /// Entry title.
    pub title: String,

    /// Kind of entry.
    pub kind: HeritageKind,

    /// Contributing artisan.
    pub artisan: String,

    /// Where the tradition lives.
    pub location: String,

    /// Cultural tradition.
    pub culture: String,

    /// View count.
    pub views: u32,

    /// Like count.
    pub likes: u32,

    /// Watch/read duration, e.g. "12 min".
    pub duration: String,

    /// Cover image URL.
    pub image: String,

    /// Teaser shown in listings.
    pub preview: String,

    /// Search tags.
    pub tags: Vec<String>,

    /// Verified by the curation team.
    pub verified: bool,
}

/// A featured artisan profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artisan {
    /// Unique identifier.
    pub id: String,

    /// Artisan name.
    pub name: String,

    /// Primary craft.
    pub craft: String,

    /// Where they work.
    pub location: String,

    /// Portrait image URL.
    pub image: String,

    /// Short biography.
    pub bio: String,
}

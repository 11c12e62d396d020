//! Events Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use artenact::{content::Event, prices::Price};

use crate::{extensions::*, state::State};

/// Events Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventsResponse {
    /// Events on the storefront calendar
    pub events: Vec<EventResponse>,
}

/// Event Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EventResponse {
    /// The unique identifier of the event
    pub id: String,

    /// Event title
    pub title: String,

    /// Kind of gathering, e.g. "workshop" or "festival"
    pub kind: String,

    /// Calendar date, ISO `YYYY-MM-DD`
    pub date: String,

    /// Human-readable time window
    pub time: String,

    /// Venue
    pub location: String,

    /// Hosting artisan
    pub artisan: String,

    /// Cultural tradition represented
    pub culture: String,

    /// Long-form description
    pub description: String,

    /// Cover image URL
    pub image: String,

    /// Admission price in cents; absent means free entry
    pub admission: Option<u64>,

    /// Maximum attendance
    pub capacity: u32,

    /// Attendees registered so far
    pub registered: u32,

    /// Seats still available
    pub spots_left: u32,

    /// Search tags
    pub tags: Vec<String>,

    /// Highlighted on the calendar
    pub featured: bool,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let spots_left = event.spots_left();
        let kind = serde_label(&event.kind);

        EventResponse {
            id: event.id,
            title: event.title,
            kind,
            date: event.date,
            time: event.time,
            location: event.location,
            artisan: event.artisan,
            culture: event.culture,
            description: event.description,
            image: event.image,
            admission: event.admission.map(Price::minor),
            capacity: event.capacity,
            registered: event.registered,
            spots_left,
            tags: event.tags,
            featured: event.featured,
        }
    }
}

/// Renders an enum through its serde snake_case name.
pub(crate) fn serde_label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|value| value.as_str().map(ToString::to_string))
        .unwrap_or_default()
}

/// Events Handler
///
/// Returns the storefront event calendar.
#[endpoint(tags("content"), summary = "List Events")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<EventsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(EventsResponse {
        events: state
            .app
            .content
            .events()
            .iter()
            .cloned()
            .map(EventResponse::from)
            .collect(),
    }))
}

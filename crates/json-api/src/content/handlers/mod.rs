//! Content Handlers

pub(crate) mod artisans;
pub(crate) mod events;
pub(crate) mod heritage;
pub(crate) mod stories;

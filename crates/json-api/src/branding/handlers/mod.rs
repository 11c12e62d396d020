//! Branding Handlers

pub(crate) mod generate;

//! Content

mod handlers;

pub(crate) use handlers::*;

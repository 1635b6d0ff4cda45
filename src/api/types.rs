//! HAL wire primitives.
//!
//! The backend wraps collections in `_embedded` and attaches per-record
//! `_links`.
//!
//! Reference: <https://stateless.group/hal_specification.html>

use serde::{Deserialize, Serialize};

/// A single HAL hyperlink: `{ "href": "..." }`.
///
/// A link the backend did not provide deserializes to an empty `href`, so
/// downstream code can rely on the field being present and only has to test
/// for emptiness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HalLink {
    #[serde(default)]
    pub href: String,
}

impl HalLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

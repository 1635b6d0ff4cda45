//! Shared plumbing for talking to the trainer REST/HAL backend.
//!
//! This module provides:
//! - HAL wire primitives shared by the customer and training surfaces
//! - Pure address resolution over heterogeneous entity identities
//! - Low-level HTTP helpers with failure containment at the boundary

pub mod http;
pub mod identity;
pub mod types;

pub use http::reset_demo_data;
pub use identity::{id_from_address, qualify_customer_ref, resolve_address, Addressable};
pub use types::HalLink;

/// Outcome of a save-by-update operation.
///
/// `Inserted` marks the upsert fallback: every addressing channel failed and
/// the record was created instead. Callers should surface that to the user,
/// since repeated inserts for the same record mean duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Updated,
    Inserted,
    Failed,
}

impl SaveOutcome {
    /// Whether the entity was persisted at all.
    pub fn succeeded(self) -> bool {
        !matches!(self, SaveOutcome::Failed)
    }
}

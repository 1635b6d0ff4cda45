//! Training sessions and their CRUD client.

pub mod client;
pub mod relations;
pub mod types;

pub use client::TrainingClient;
pub use relations::fill_missing_customers;
pub use types::{Training, TrainingCollection, TrainingDraft, TrainingLinks};

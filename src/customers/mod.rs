//! Customer records and their CRUD client.

pub mod client;
pub mod types;

pub use client::CustomerClient;
pub use types::{Customer, CustomerCollection, CustomerLinks};

//! Client library for the personal-trainer REST/HAL backend.
//!
//! The backend addresses the same record two incompatible ways depending on
//! which endpoint produced it: HAL collection endpoints return hyperlinked
//! records without numeric keys, the flat read endpoint returns keyed
//! records without links. This crate normalizes both into one addressable
//! identity per entity, performs CRUD against that identity with an ordered
//! fallback chain, and contains every failure at its boundary: operations
//! report outcome values, never errors.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use trainer_client::{ApiConfig, CustomerClient};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = ApiConfig::from_env()?;
//! let client = CustomerClient::new(config)?;
//! let customers = client.list().await;
//! println!("{} customers", customers.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod customers;
pub mod error;
pub mod stats;
pub mod trainings;

pub use api::{
    id_from_address, qualify_customer_ref, reset_demo_data, resolve_address, Addressable,
    HalLink, SaveOutcome,
};
pub use config::ApiConfig;
pub use customers::{Customer, CustomerClient, CustomerCollection, CustomerLinks};
pub use error::ApiError;
pub use stats::{minutes_by_activity, ActivityMinutes};
pub use trainings::{
    fill_missing_customers, Training, TrainingClient, TrainingCollection, TrainingDraft,
    TrainingLinks,
};

//! Opportunistic loading of the customer attached to a training session.
//!
//! Link-carrying trainings (from the HAL collection endpoint) hold a
//! `customer` relation address instead of an embedded customer. This pass
//! resolves those addresses against the backend and merges the results into
//! the caller-owned collection in place.

use std::collections::HashMap;

use tracing::warn;

use crate::customers::{Customer, CustomerClient};
use crate::trainings::types::Training;

/// Fill in missing embedded customers across a caller-owned collection.
///
/// One pass: each training that lacks an embedded customer but carries a
/// non-empty customer relation address gets the customer fetched and merged
/// into its own slot. Distinct addresses are fetched at most once per call,
/// so several sessions of the same customer share one request. Repeated
/// calls are idempotent (already-embedded customers are skipped), and a
/// failed fetch leaves the slot empty for the caller's "no relation"
/// placeholder.
pub async fn fill_missing_customers(client: &CustomerClient, trainings: &mut [Training]) {
    let mut fetched: HashMap<String, Option<Customer>> = HashMap::new();

    for training in trainings.iter_mut() {
        if training.customer.is_some() {
            continue;
        }
        let address = training.links.customer.href.trim();
        if address.is_empty() {
            continue;
        }

        if !fetched.contains_key(address) {
            let customer = client.get(address).await;
            if customer.is_none() {
                warn!(address, "customer relation fetch failed, leaving placeholder");
            }
            fetched.insert(address.to_string(), customer);
        }

        training.customer = fetched.get(address).cloned().flatten();
    }
}

//! Resilient CRUD client for customer records.

use anyhow::Result;
use tracing::{debug, warn};

use crate::api::http::Api;
use crate::api::identity::{address_candidates, resolve_address};
use crate::api::SaveOutcome;
use crate::config::ApiConfig;
use crate::customers::types::{Customer, CustomerCollection};

/// Client for the `/customers` surface.
///
/// Every operation contains its own failures: transport errors and
/// non-success statuses are logged and mapped to outcome values, never
/// propagated to the caller.
pub struct CustomerClient {
    api: Api,
}

impl CustomerClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            api: Api::new(config)?,
        })
    }

    fn collection_url(&self) -> String {
        self.api.config().collection_url("customers")
    }

    /// Fetch all customers. Any transport or decoding failure yields an
    /// empty list.
    pub async fn list(&self) -> Vec<Customer> {
        match self
            .api
            .get_json::<CustomerCollection>(&self.collection_url())
            .await
        {
            Ok(document) => document.into_customers(),
            Err(e) => {
                warn!(error = %e, "customer list failed");
                Vec::new()
            }
        }
    }

    /// Fetch a single customer by address. `None` on any failure.
    pub async fn get(&self, address: &str) -> Option<Customer> {
        match self.api.get_json::<Customer>(address).await {
            Ok(customer) => Some(customer),
            Err(e) => {
                warn!(address, error = %e, "customer fetch failed");
                None
            }
        }
    }

    /// Create a customer. `true` iff the backend answered `201 Created`.
    pub async fn create(&self, customer: &Customer) -> bool {
        match self.api.post_created(&self.collection_url(), customer).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "customer create failed");
                false
            }
        }
    }

    /// Update a customer, walking the addressing channels in order: the
    /// `self` relation address, the synthesized key address, then a
    /// server-side lookup by discriminating attributes. If a channel
    /// existed but every attempt failed, the record is created instead and
    /// the caller is told via [`SaveOutcome::Inserted`] that the update
    /// became an insert. A record with no channel at all is unaddressable:
    /// the operation fails without issuing a single request.
    pub async fn update(&self, customer: &Customer) -> SaveOutcome {
        let candidates = address_candidates(customer, self.api.config());
        if candidates.is_empty() && !customer.has_discriminators() {
            warn!("customer carries no usable identity, refusing to save");
            return SaveOutcome::Failed;
        }

        for address in candidates {
            match self.api.put_json(&address, customer).await {
                Ok(()) => return SaveOutcome::Updated,
                Err(e) => warn!(address = %address, error = %e, "customer update failed"),
            }
        }

        if let Some(address) = self.locate_by_attributes(customer).await {
            debug!(address = %address, "updating via attribute match");
            match self.api.put_json(&address, customer).await {
                Ok(()) => return SaveOutcome::Updated,
                Err(e) => warn!(address = %address, error = %e, "customer update failed"),
            }
        }

        if self.create(customer).await {
            SaveOutcome::Inserted
        } else {
            SaveOutcome::Failed
        }
    }

    /// Delete a customer, walking the same addressing channels as
    /// [`CustomerClient::update`]. Unlike update there is no create
    /// fallback: an unaddressable delete reports `false` without touching
    /// the network, never a destructive guess.
    pub async fn delete(&self, customer: &Customer) -> bool {
        for address in address_candidates(customer, self.api.config()) {
            match self.api.delete(&address).await {
                Ok(()) => return true,
                Err(e) => warn!(address = %address, error = %e, "customer delete failed"),
            }
        }

        if let Some(address) = self.locate_by_attributes(customer).await {
            debug!(address = %address, "deleting via attribute match");
            match self.api.delete(&address).await {
                Ok(()) => return true,
                Err(e) => warn!(address = %address, error = %e, "customer delete failed"),
            }
        }

        false
    }

    /// Server-side lookup by firstname + lastname + email.
    ///
    /// Exactly one matching record is required; zero and several matches
    /// are both "not found"; a near-miss must never address the wrong
    /// record. Matching is exact, no trimming or case folding.
    async fn locate_by_attributes(&self, customer: &Customer) -> Option<String> {
        if !customer.has_discriminators() {
            return None;
        }

        let mut matches = self.list().await.into_iter().filter(|candidate| {
            candidate.firstname == customer.firstname
                && candidate.lastname == customer.lastname
                && candidate.email == customer.email
        });

        let hit = matches.next()?;
        if matches.next().is_some() {
            warn!(
                firstname = %customer.firstname,
                lastname = %customer.lastname,
                "ambiguous attribute match, refusing to pick"
            );
            return None;
        }

        resolve_address(&hit, self.api.config())
    }
}

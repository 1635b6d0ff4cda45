//! Resilient CRUD client for training sessions.

use anyhow::Result;
use tracing::warn;

use crate::api::http::Api;
use crate::api::identity::{address_candidates, non_empty, qualify_customer_ref, resolve_address};
use crate::api::SaveOutcome;
use crate::config::ApiConfig;
use crate::trainings::types::{Training, TrainingBody, TrainingCollection, TrainingDraft};

/// Client for the `/trainings` surface.
///
/// Reads prefer the flat `/gettrainings` endpoint, which pre-embeds each
/// session's customer; [`TrainingClient::list_linked`] exposes the HAL
/// collection whose records carry relation links instead, for use with the
/// lazy loader. Failures are contained the same way as in
/// [`crate::CustomerClient`].
pub struct TrainingClient {
    api: Api,
}

impl TrainingClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            api: Api::new(config)?,
        })
    }

    fn collection_url(&self) -> String {
        self.api.config().collection_url("trainings")
    }

    /// Fetch all training sessions via the flat read endpoint, customers
    /// pre-embedded. Any failure yields an empty list.
    pub async fn list(&self) -> Vec<Training> {
        let url = self.api.config().collection_url("gettrainings");
        match self.api.get_json::<Vec<Training>>(&url).await {
            Ok(trainings) => trainings,
            Err(e) => {
                warn!(error = %e, "training list failed");
                Vec::new()
            }
        }
    }

    /// Fetch all training sessions via the HAL collection endpoint. Records
    /// carry relation links and no embedded customer; pair with
    /// [`crate::fill_missing_customers`].
    pub async fn list_linked(&self) -> Vec<Training> {
        match self
            .api
            .get_json::<TrainingCollection>(&self.collection_url())
            .await
        {
            Ok(document) => document.into_trainings(),
            Err(e) => {
                warn!(error = %e, "training list failed");
                Vec::new()
            }
        }
    }

    /// Fetch a single training by address. `None` on any failure.
    pub async fn get(&self, address: &str) -> Option<Training> {
        match self.api.get_json::<Training>(address).await {
            Ok(training) => Some(training),
            Err(e) => {
                warn!(address, error = %e, "training fetch failed");
                None
            }
        }
    }

    /// Create a training session. The draft's customer reference is
    /// qualified to a full address before the body is built. `true` iff
    /// the backend answered `201 Created`.
    pub async fn create(&self, draft: &TrainingDraft) -> bool {
        let body = draft_body(draft, self.api.config());
        match self.api.post_created(&self.collection_url(), &body).await {
            Ok(()) => true,
            Err(e) => {
                warn!(activity = %draft.activity, error = %e, "training create failed");
                false
            }
        }
    }

    /// Update a training, walking the addressing channels in order; if a
    /// channel existed but every attempt failed, the session is created
    /// instead and reported as [`SaveOutcome::Inserted`]. A session with
    /// no channel at all is unaddressable and fails without a request.
    pub async fn update(&self, training: &Training) -> SaveOutcome {
        let candidates = address_candidates(training, self.api.config());
        if candidates.is_empty() {
            warn!(activity = %training.activity, "training carries no usable address, refusing to save");
            return SaveOutcome::Failed;
        }

        let body = self.body_for(training);

        for address in candidates {
            match self.api.put_json(&address, &body).await {
                Ok(()) => return SaveOutcome::Updated,
                Err(e) => warn!(address = %address, error = %e, "training update failed"),
            }
        }

        let draft = TrainingDraft {
            date: training.date,
            duration: training.duration,
            activity: training.activity.clone(),
            customer: body.customer,
        };
        if self.create(&draft).await {
            SaveOutcome::Inserted
        } else {
            SaveOutcome::Failed
        }
    }

    /// Delete a training, walking the addressing channels in order. No
    /// create fallback: an unaddressable delete reports `false` without
    /// touching the network.
    pub async fn delete(&self, training: &Training) -> bool {
        let candidates = address_candidates(training, self.api.config());
        if candidates.is_empty() {
            warn!(activity = %training.activity, "training carries no usable address, refusing to delete");
            return false;
        }

        for address in candidates {
            match self.api.delete(&address).await {
                Ok(()) => return true,
                Err(e) => warn!(address = %address, error = %e, "training delete failed"),
            }
        }
        false
    }

    /// Build the request body for an existing training. The customer
    /// address comes from the embedded customer when present, else from
    /// the customer relation link; like on create, the backend rejects
    /// anything but a full address.
    fn body_for(&self, training: &Training) -> TrainingBody {
        let customer = training
            .customer
            .as_ref()
            .and_then(|customer| resolve_address(customer, self.api.config()))
            .or_else(|| non_empty(&training.links.customer.href).map(str::to_string))
            .unwrap_or_default();

        TrainingBody {
            date: training.date,
            duration: training.duration,
            activity: training.activity.clone(),
            customer,
        }
    }
}

fn draft_body(draft: &TrainingDraft, config: &ApiConfig) -> TrainingBody {
    TrainingBody {
        date: draft.date,
        duration: draft.duration,
        activity: draft.activity.clone(),
        customer: qualify_customer_ref(&draft.customer, config),
    }
}

//! Training wire and entity types.
//!
//! Trainings arrive in two shapes: `GET /gettrainings` returns a flat array
//! with numeric ids and a pre-embedded customer, while the HAL collection
//! endpoint returns `_links`-addressed records with no embedding. The
//! canonical [`Training`] carries both identity channels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::identity::{non_empty, Addressable};
use crate::api::types::HalLink;
use crate::customers::Customer;

/// A training session in its canonical in-memory shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Training {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: i64,
    pub activity: String,
    /// Pre-embedded customer, when the flat read endpoint supplied one.
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(rename = "_links", default)]
    pub links: TrainingLinks,
}

/// Relation addresses attached to a training record. Always present on the
/// in-memory entity; a relation the backend omitted has an empty `href`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingLinks {
    #[serde(rename = "self")]
    pub self_link: HalLink,
    /// Typed link to the same record.
    pub training: HalLink,
    /// The customer this session belongs to; a lookup key for the lazy
    /// loader, not an ownership edge.
    pub customer: HalLink,
}

impl Addressable for Training {
    const COLLECTION: &'static str = "trainings";

    fn self_address(&self) -> Option<&str> {
        non_empty(&self.links.self_link.href)
    }

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn alternate_address(&self) -> Option<&str> {
        non_empty(&self.links.training.href)
    }
}

/// Caller-facing draft for creating a training session.
///
/// `customer` accepts any reference shape (a bare numeric id, a relative
/// path such as `customers/5`, or a full address) and is qualified before
/// the request body is built, since the backend rejects bare identifiers.
#[derive(Debug, Clone)]
pub struct TrainingDraft {
    pub date: DateTime<Utc>,
    pub duration: i64,
    pub activity: String,
    pub customer: String,
}

/// Request body for `POST /trainings` and `PUT /trainings/{id}`; the
/// `customer` field is always a fully qualified address.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TrainingBody {
    pub date: DateTime<Utc>,
    pub duration: i64,
    pub activity: String,
    pub customer: String,
}

/// HAL collection document for `GET /trainings`.
#[derive(Debug, Default, Deserialize)]
pub struct TrainingCollection {
    #[serde(rename = "_embedded", default)]
    embedded: EmbeddedTrainings,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedTrainings {
    #[serde(default)]
    trainings: Vec<Training>,
}

impl TrainingCollection {
    /// Entities in payload order; empty when the backend omitted the
    /// embedded collection entirely.
    pub fn into_trainings(self) -> Vec<Training> {
        self.embedded.trainings
    }
}

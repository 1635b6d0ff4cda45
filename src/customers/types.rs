//! Customer wire and entity types.

use serde::{Deserialize, Serialize};

use crate::api::identity::{non_empty, Addressable};
use crate::api::types::HalLink;

/// A customer record in its canonical in-memory shape.
///
/// Depending on the endpoint that produced it, either the numeric `id`
/// (flat read endpoint) or the `links` block (HAL collection endpoint) is
/// populated, sometimes both, sometimes neither. Serialized as a request
/// body it carries the domain attributes only; `_links` is read-only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub firstname: String,
    pub lastname: String,
    pub streetaddress: String,
    pub postcode: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "_links", skip_serializing)]
    pub links: CustomerLinks,
}

impl Customer {
    /// Whether the record carries all three discriminating attributes used
    /// by the server-side lookup fallback.
    pub fn has_discriminators(&self) -> bool {
        !self.firstname.is_empty() && !self.lastname.is_empty() && !self.email.is_empty()
    }
}

/// Relation addresses attached to a customer record. Always present on the
/// in-memory entity; a relation the backend omitted has an empty `href`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomerLinks {
    #[serde(rename = "self")]
    pub self_link: HalLink,
    /// Typed link to the same record.
    pub customer: HalLink,
    /// Collection of the customer's training sessions.
    pub trainings: HalLink,
}

impl Addressable for Customer {
    const COLLECTION: &'static str = "customers";

    fn self_address(&self) -> Option<&str> {
        non_empty(&self.links.self_link.href)
    }

    fn key(&self) -> Option<i64> {
        self.id
    }

    fn alternate_address(&self) -> Option<&str> {
        non_empty(&self.links.customer.href)
    }
}

/// `GET /customers` response document:
/// `{ "_embedded": { "customers": [ ... ] } }`.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerCollection {
    #[serde(rename = "_embedded", default)]
    embedded: EmbeddedCustomers,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedCustomers {
    #[serde(default)]
    customers: Vec<Customer>,
}

impl CustomerCollection {
    /// Entities in payload order; empty when the backend omitted the
    /// embedded collection entirely.
    pub fn into_customers(self) -> Vec<Customer> {
        self.embedded.customers
    }
}

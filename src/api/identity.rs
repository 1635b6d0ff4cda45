//! Entity address resolution.
//!
//! The backend addresses the same record two incompatible ways depending on
//! which endpoint produced it: HAL collection endpoints attach hyperlinks
//! and omit the numeric key, the flat read endpoint carries the key and no
//! links. Everything here is pure: resolution is an ordered walk over the
//! identity channels an entity exposes, never a network call.

use crate::config::ApiConfig;

/// Identity channels an entity can expose.
///
/// Implemented by [`crate::Customer`] and [`crate::Training`]. Channel
/// accessors return `None` for absent *or empty* values so the resolver
/// never hands back a blank address.
pub trait Addressable {
    /// Collection segment under the API base, e.g. `"customers"`.
    const COLLECTION: &'static str;

    /// Explicit `self` relation address, if the backend provided one.
    fn self_address(&self) -> Option<&str>;

    /// Numeric primary key, if the entity came from a flat endpoint.
    fn key(&self) -> Option<i64>;

    /// Alternate relation address pointing at the same record (the typed
    /// HAL link, e.g. `customer` on a customer record).
    fn alternate_address(&self) -> Option<&str> {
        None
    }
}

/// Resolve the canonical backend address for `entity`.
///
/// Channels are consulted most specific first, and the order must not
/// change: (1) the explicit `self` relation address, returned verbatim,
/// (2) the numeric key, synthesized into `<base>/<collection>/<key>`,
/// (3) the alternate relation address. `None` means the entity cannot be
/// addressed; callers must fail the operation or fall back to an
/// attribute lookup, never guess.
pub fn resolve_address<T: Addressable>(entity: &T, config: &ApiConfig) -> Option<String> {
    address_candidates(entity, config).into_iter().next()
}

/// All addresses at which `entity` may be reachable, in resolution order
/// and deduplicated. The CRUD fallback chains try these one by one, so a
/// request failure on the preferred channel still gets a shot at the next.
pub fn address_candidates<T: Addressable>(entity: &T, config: &ApiConfig) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(address) = entity.self_address() {
        candidates.push(address.to_string());
    }
    if let Some(key) = entity.key() {
        let synthesized = format!("{}/{}/{}", config.base_url(), T::COLLECTION, key);
        if !candidates.contains(&synthesized) {
            candidates.push(synthesized);
        }
    }
    if let Some(address) = entity.alternate_address() {
        if !candidates.iter().any(|c| c == address) {
            candidates.push(address.to_string());
        }
    }
    candidates
}

/// Extract the trailing path segment of an address, for when only the bare
/// identifier is needed.
pub fn id_from_address(address: &str) -> Option<&str> {
    address
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Normalize a caller-supplied customer reference to a fully qualified
/// address.
///
/// The backend rejects bare identifiers in training request bodies, so a
/// numeric reference or a relative path such as `customers/5` is joined
/// onto the configured base. An already-absolute address passes through
/// verbatim; an empty reference stays empty.
pub fn qualify_customer_ref(reference: &str, config: &ApiConfig) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        return String::new();
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    let relative = reference.trim_start_matches('/');
    if relative.chars().all(|c| c.is_ascii_digit()) {
        format!("{}/customers/{}", config.base_url(), relative)
    } else {
        format!("{}/{}", config.base_url(), relative)
    }
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

//! Port for the external link-shortening collaborator

use sealant_types::Result;

/// Turns a long URL into a short one
///
/// Implementations live in the infrastructure layer. The contract is
/// text-in / text-out: the returned string is the short URL.
pub trait LinkShortener {
    fn shorten(&self, long_url: &str) -> Result<String>;
}

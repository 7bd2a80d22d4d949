//! Nonce and timestamp generation for OAuth 1.0a requests.
//!
//! Every signed request carries a single-use nonce plus the current Unix
//! time in seconds. The pair is what makes a signed URL unusable twice.

use time::OffsetDateTime;
use uuid::Uuid;

/// The per-request replay protection values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonceAndTimestamp {
    /// Single-use random token (`oauth_nonce`)
    pub nonce: String,
    /// Unix time in seconds (`oauth_timestamp`)
    pub timestamp: i64,
}

/// Trait for providing the nonce and timestamp of a request.
///
/// Implementations must never fail and must not share mutable state
/// between calls in a way that could hand out the same nonce twice.
pub trait NonceProvider: Send + Sync {
    /// Generate a fresh nonce together with the current timestamp.
    fn generate(&self) -> NonceAndTimestamp;
}

/// A nonce provider backed by random UUIDs.
///
/// Each nonce is 16 random bytes rendered as 32 lowercase hex characters,
/// which is also safe to place in a URL without escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl RandomNonce {
    /// Create a new random nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for RandomNonce {
    fn generate(&self) -> NonceAndTimestamp {
        NonceAndTimestamp {
            nonce: Uuid::new_v4().simple().to_string(),
            timestamp: unix_timestamp(),
        }
    }
}

/// A nonce provider that always returns the same values.
///
/// Only useful for reproducing a signature; a server will reject the second
/// request signed with it.
#[derive(Debug, Clone)]
pub struct FixedNonce {
    nonce: String,
    timestamp: i64,
}

impl FixedNonce {
    /// Create a provider pinned to `nonce` and `timestamp`.
    pub fn new(nonce: impl Into<String>, timestamp: i64) -> Self {
        Self {
            nonce: nonce.into(),
            timestamp,
        }
    }
}

impl NonceProvider for FixedNonce {
    fn generate(&self) -> NonceAndTimestamp {
        NonceAndTimestamp {
            nonce: self.nonce.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// Current Unix time in whole seconds.
pub fn unix_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

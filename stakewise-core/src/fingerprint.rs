//! Input fingerprinting for "latest input wins" callers.
//!
//! The engine keeps no state, so superseded results are the caller's to
//! discard. Stamping a result with a hash of the input that produced it lets
//! the caller check whether a finished result still matches what is on screen.

use serde::{Deserialize, Serialize};

/// BLAKE3 hash of an input's canonical JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFingerprint(pub String);

impl InputFingerprint {
    pub fn of<T: Serialize>(input: &T) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_vec(input)?;
        Ok(Self(blake3::hash(&json).to_hex().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A result tagged with the fingerprint of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamped<T> {
    pub fingerprint: InputFingerprint,
    pub value: T,
}

impl<T> Stamped<T> {
    pub fn new<I: Serialize>(input: &I, value: T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            fingerprint: InputFingerprint::of(input)?,
            value,
        })
    }

    /// Whether this result was computed from `input`.
    pub fn is_current_for<I: Serialize>(&self, input: &I) -> bool {
        InputFingerprint::of(input).is_ok_and(|f| f == self.fingerprint)
    }
}

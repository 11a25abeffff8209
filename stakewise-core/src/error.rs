//! Engine error taxonomy.
//!
//! Every failure is terminal for the single calculation that raised it. There
//! is no I/O underneath the engine, so nothing here is retryable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the sizer and allocator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A field was missing, non-numeric, non-finite, or outside its domain.
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Entry and stop-loss coincide, so risk per share is zero.
    #[error("stop loss equals entry price {entry_price}; risk per share is zero")]
    DegenerateRisk { entry_price: f64 },

    /// Nothing to allocate into.
    #[error("empty portfolio: {0}")]
    EmptyPortfolio(EmptyReason),
}

impl EngineError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Why an allocation request has nothing to allocate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    NoSectors,
    NoValidCompanies,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSectors => write!(f, "no sectors"),
            Self::NoValidCompanies => write!(f, "no company has a name and a positive share price"),
        }
    }
}

//! Position Sizers — turn a risk budget into a share quantity.
//!
//! Sizers translate capital, risk tolerance, and price levels into a whole
//! number of shares plus the money figures that go with it.

pub mod risk;

pub use risk::RiskSizer;

use crate::domain::{SizingInput, SizingResult};
use crate::error::EngineError;

/// Position sizing logic
///
/// # Responsibilities
/// - Validate the input atomically (no partial result on bad fields)
/// - Convert capital + risk % + entry/stop → whole-share quantity
/// - Never recommend spending more than the available capital
///
/// # Non-Responsibilities
/// - Sizers do NOT format money or build chart series
/// - Sizers do NOT retain anything between calls
pub trait Sizer: Send + Sync {
    /// Size a single trade.
    fn size(&self, input: &SizingInput) -> Result<SizingResult, EngineError>;

    /// Sizer name for logging
    fn name(&self) -> &str;
}

/// Size a trade with the default [`RiskSizer`].
pub fn size(input: &SizingInput) -> Result<SizingResult, EngineError> {
    RiskSizer.size(input)
}

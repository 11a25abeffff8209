//! Single-instrument sizing records.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Price levels and risk budget for one trade.
///
/// The stop may sit below the entry (long) or above it (short). Fields are
/// public so callers can build the value directly; the sizer re-validates
/// before computing anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    /// Percent of capital the trader accepts losing, in (0, 100].
    pub risk_percentage: f64,
    pub total_capital: f64,
}

impl SizingInput {
    /// Build a validated input.
    pub fn new(
        entry_price: f64,
        stop_loss: f64,
        target_price: f64,
        risk_percentage: f64,
        total_capital: f64,
    ) -> Result<Self, EngineError> {
        let input = Self {
            entry_price,
            stop_loss,
            target_price,
            risk_percentage,
            total_capital,
        };
        input.validate()?;
        Ok(input)
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("entry_price", self.entry_price),
            ("stop_loss", self.stop_loss),
            ("target_price", self.target_price),
            ("risk_percentage", self.risk_percentage),
            ("total_capital", self.total_capital),
        ]
    }

    /// Check every field before any arithmetic happens.
    ///
    /// All five must be finite and positive; the risk percentage must also be
    /// at most 100. The first offending field is reported.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(EngineError::invalid(field, "must be a finite number"));
            }
            if value <= 0.0 {
                return Err(EngineError::invalid(field, "must be greater than zero"));
            }
        }
        if self.risk_percentage > 100.0 {
            return Err(EngineError::invalid(
                "risk_percentage",
                "must not exceed 100",
            ));
        }
        Ok(())
    }

    /// Absolute distance between entry and stop.
    pub fn risk_per_share(&self) -> f64 {
        (self.entry_price - self.stop_loss).abs()
    }

    /// Signed distance from entry to target. Negative for a short or an
    /// unfavorable target.
    pub fn reward_per_share(&self) -> f64 {
        self.target_price - self.entry_price
    }

    /// Capital the trader is willing to lose on this trade.
    pub fn risk_amount(&self) -> f64 {
        self.total_capital * self.risk_percentage / 100.0
    }
}

/// Output of the position sizer.
///
/// Invariant: `total_spent <= total capital` of the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub risk_per_share: f64,
    pub risk_amount: f64,
    pub quantity: u64,
    pub total_spent: f64,
    pub reward_amount: f64,
    /// True when the risk-based quantity was cut down to fit the capital.
    pub clamped: bool,
}

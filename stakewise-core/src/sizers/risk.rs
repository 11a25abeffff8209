//! Risk Sizer
//!
//! Position size from a fixed fraction of capital at risk and the distance
//! between entry and stop, capped by the capital itself.

use tracing::debug;

use crate::domain::{whole_units, SizingInput, SizingResult};
use crate::error::EngineError;
use crate::sizers::Sizer;

/// Risk-based sizer with a capital clamp
///
/// # Formula
/// ```text
/// risk_per_share = |entry - stop|
/// risk_amount    = capital * risk_pct / 100
/// quantity       = floor(risk_amount / risk_per_share)
/// if quantity * entry > capital:
///     quantity   = floor(capital / entry)
/// reward_amount  = quantity * (target - entry)
/// ```
///
/// # Example
/// - Capital: 100,000, risk 2% (2,000)
/// - Entry 100, stop 95: risk per share 5
/// - Quantity: 2,000 / 5 = 400 shares, spending 40,000
/// - Target 120: reward 400 * 20 = 8,000
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskSizer;

impl Sizer for RiskSizer {
    fn size(&self, input: &SizingInput) -> Result<SizingResult, EngineError> {
        input.validate()?;

        let risk_per_share = input.risk_per_share();
        if risk_per_share == 0.0 {
            return Err(EngineError::DegenerateRisk {
                entry_price: input.entry_price,
            });
        }

        let risk_amount = input.risk_amount();
        let mut quantity = (risk_amount / risk_per_share).floor() as u64;
        let mut total_spent = quantity as f64 * input.entry_price;

        let clamped = total_spent > input.total_capital;
        if clamped {
            let risk_quantity = quantity;
            quantity = whole_units(input.total_capital, input.entry_price);
            total_spent = quantity as f64 * input.entry_price;
            debug!(
                risk_quantity,
                clamped_quantity = quantity,
                capital = input.total_capital,
                "risk quantity exceeds capital, clamping"
            );
        }

        let reward_amount = quantity as f64 * input.reward_per_share();

        Ok(SizingResult {
            risk_per_share,
            risk_amount,
            quantity,
            total_spent,
            reward_amount,
            clamped,
        })
    }

    fn name(&self) -> &str {
        "Risk"
    }
}

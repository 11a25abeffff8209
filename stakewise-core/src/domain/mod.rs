//! Domain types for the capital-allocation engine.
//!
//! Every record here is an immutable value produced in a single pass. Nothing
//! is mutated after construction and nothing outlives the calculation call.

pub mod allocation;
pub mod sizing;

pub use allocation::{AllocationLine, AllocationRequest, AllocationSummary, Company, Sector};
pub use sizing::{SizingInput, SizingResult};

/// Largest whole number of units of `price` that fits inside `budget`.
///
/// Always floors. The result never overspends: if float division rounds the
/// quotient up onto an integer, the count is stepped back by one.
pub fn whole_units(budget: f64, price: f64) -> u64 {
    if !budget.is_finite() || !price.is_finite() || budget <= 0.0 || price <= 0.0 {
        return 0;
    }
    let mut units = (budget / price).floor() as u64;
    while units > 0 && units as f64 * price > budget {
        units -= 1;
    }
    units
}

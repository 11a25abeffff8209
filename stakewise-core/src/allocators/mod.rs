//! Portfolio Allocators — split capital across a sector/company tree.

pub mod equal_weight;

pub use equal_weight::EqualWeightAllocator;

use crate::domain::{AllocationRequest, AllocationSummary};
use crate::error::EngineError;

/// Hierarchical capital allocation.
///
/// Implementations turn a fully materialized [`AllocationRequest`] into
/// whole-share purchases. Invalid company rows are skipped, never raised.
pub trait Allocator: Send + Sync {
    fn allocate(&self, request: &AllocationRequest) -> Result<AllocationSummary, EngineError>;

    /// Allocator name for logging
    fn name(&self) -> &str;
}

/// Allocate with the default [`EqualWeightAllocator`].
pub fn allocate(request: &AllocationRequest) -> Result<AllocationSummary, EngineError> {
    EqualWeightAllocator.allocate(request)
}

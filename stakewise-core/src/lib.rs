//! Stakewise Core — capital-allocation engine.
//!
//! This crate contains the two calculators and their presentation adapters:
//! - Domain types (sizing input/result, sector/company tree, allocation lines)
//! - Untrusted form parsing (strings in, validated numbers out)
//! - Risk-based position sizer with a capital clamp
//! - Equal-weight sector → company allocator
//! - Result formatter (labeled text, HTML-safe)
//! - Chart series builder (label/value/color tuples)
//!
//! Every calculation is a pure function of its input. Nothing is cached or
//! retained between calls.

pub mod allocators;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod fingerprint;
pub mod format;
pub mod input;
pub mod sizers;

pub use allocators::{allocate, Allocator, EqualWeightAllocator};
pub use chart::{ChartPoint, ChartSeries, Palette, ToSeries};
pub use config::{ChartConfig, ConfigError, EngineConfig};
pub use domain::{
    AllocationLine, AllocationRequest, AllocationSummary, Company, Sector, SizingInput,
    SizingResult,
};
pub use error::{EmptyReason, EngineError};
pub use fingerprint::{InputFingerprint, Stamped};
pub use format::{format_summary, DigitGrouping, FormatConfig, Summarize, Summary, SummaryRow};
pub use input::{AllocationForm, CompanyForm, SectorForm, SizingForm};
pub use sizers::{size, RiskSizer, Sizer};

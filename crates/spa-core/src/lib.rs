#![deny(warnings)]

//! Core data model for the spa financial model.
//!
//! This crate defines the serializable configuration and result records
//! exchanged with the calculation engine, the built-in default
//! configuration, structural validation, and the optional rent tier guard.

use chrono::Weekday;
use thiserror::Error;

pub mod config;
pub mod report;
pub mod tiers;
pub mod validate;

pub use config::*;
pub use report::*;
pub use tiers::{analyze_tiers, normalize_tiers, TierDiagnostic, TierGuard, TierPolicy};
pub use validate::{check_degenerate, validate_config};

/// Number of entries in every per-day array.
pub const DAYS_PER_WEEK: usize = 7;

/// Weeks used to annualize weekly figures.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Day labels for array index 0..6.
pub const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Malformed configuration: the engine refuses to compute.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// A per-day array does not have exactly seven entries.
    #[error("{field} must have 7 entries (Mon..Sun), found {found}")]
    WeekLength { field: &'static str, found: usize },
    /// Numeric field is NaN or infinite.
    #[error("{0} contains a non-finite value")]
    NonFinite(&'static str),
    /// Rent tier schedule rejected by a tier guard.
    #[error("rent tiers rejected: {0}")]
    RentTiers(TierDiagnostic),
    /// Unrecognized tier policy name.
    #[error("unknown tier policy: {0:?} (expected permissive, strict or normalize)")]
    UnknownTierPolicy(String),
}

/// Configuration that would divide by zero in the capacity formulas.
#[derive(Debug, Error, PartialEq)]
pub enum DegenerateConfigurationError {
    /// `treatmentDuration + cleaningTime` is zero or negative.
    #[error("treatment cycle (duration + cleaning) must be > 0 minutes, got {0}")]
    TreatmentCycle(f64),
    /// Thermal session duration is zero or negative.
    #[error("thermal session duration must be > 0 hours, got {0}")]
    SessionDuration(f64),
}

/// Any reason a calculation pass is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Degenerate(#[from] DegenerateConfigurationError),
}

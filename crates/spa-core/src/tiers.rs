//! Optional guard layer for rent tier schedules.
//!
//! The rent calculator accepts any tier list. Callers that load
//! configurations can run a [`TierGuard`] first to accept, reject or
//! normalize schedules with gaps and overlaps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{RentTier, SpaConfig};
use crate::ConfigurationError;

/// Shape problems found in a tier schedule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TierDiagnostic {
    /// Tier at `index` starts below the tier listed before it.
    Unsorted { index: usize },
    /// Upper bound below lower bound.
    Inverted { min: f64, max: f64 },
    /// Revenue in `[from, to)` falls in no tier and is charged nothing.
    Gap { from: f64, to: f64 },
    /// Revenue in `[from, to)` is charged by two tiers.
    Overlap { from: f64, to: f64 },
    /// An open-ended tier is followed by another tier.
    UnboundedNotLast { min: f64 },
}

impl TierDiagnostic {
    /// Whether this diagnostic changes what revenue is charged twice or backwards.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TierDiagnostic::Inverted { .. }
                | TierDiagnostic::Overlap { .. }
                | TierDiagnostic::UnboundedNotLast { .. }
        )
    }
}

impl fmt::Display for TierDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierDiagnostic::Unsorted { index } => write!(f, "tier {index} is out of order"),
            TierDiagnostic::Inverted { min, max } => {
                write!(f, "tier max {max} is below its min {min}")
            }
            TierDiagnostic::Gap { from, to } => write!(f, "no tier covers revenue {from}..{to}"),
            TierDiagnostic::Overlap { from, to } => {
                write!(f, "revenue {from}..{to} is covered by two tiers")
            }
            TierDiagnostic::UnboundedNotLast { min } => {
                write!(f, "open-ended tier starting at {min} is not the last tier")
            }
        }
    }
}

fn sorted(tiers: &[RentTier]) -> Vec<RentTier> {
    let mut out = tiers.to_vec();
    out.sort_by(|a, b| a.min_revenue.total_cmp(&b.min_revenue));
    out
}

/// List every shape problem in `tiers`. An empty list means the schedule is
/// sorted, contiguous from zero, and non-overlapping.
pub fn analyze_tiers(tiers: &[RentTier]) -> Vec<TierDiagnostic> {
    let mut found = Vec::new();
    for (index, pair) in tiers.windows(2).enumerate() {
        if pair[1].min_revenue < pair[0].min_revenue {
            found.push(TierDiagnostic::Unsorted { index: index + 1 });
        }
    }
    for t in tiers {
        if let Some(max) = t.max_revenue {
            if max < t.min_revenue {
                found.push(TierDiagnostic::Inverted {
                    min: t.min_revenue,
                    max,
                });
            }
        }
    }

    // Walk the sorted tiers against the highest upper bound seen so far, so a
    // wide tier is compared with every tier it covers, not just its neighbour.
    let mut frontier: Option<f64> = None;
    let mut open_from: Option<f64> = None;
    for t in sorted(tiers) {
        if let Some(min) = open_from.take() {
            found.push(TierDiagnostic::UnboundedNotLast { min });
            break;
        }
        if t.end() < t.min_revenue {
            continue;
        }
        let covered = frontier.unwrap_or(0.0);
        if t.min_revenue > covered {
            found.push(TierDiagnostic::Gap {
                from: covered,
                to: t.min_revenue,
            });
        } else if frontier.is_some() && t.min_revenue < covered {
            found.push(TierDiagnostic::Overlap {
                from: t.min_revenue,
                to: covered.min(t.end()),
            });
        }
        frontier = Some(covered.max(t.end()));
        if t.max_revenue.is_none() {
            open_from = Some(t.min_revenue);
        }
    }
    found
}

/// Admission check run on a tier schedule before it reaches the engine.
pub trait TierGuard {
    /// Return the schedule to use, or reject it.
    fn admit(&self, tiers: &[RentTier]) -> Result<Vec<RentTier>, ConfigurationError>;

    /// Apply [`TierGuard::admit`] to the tiers of a whole configuration.
    fn guard_config(&self, mut cfg: SpaConfig) -> Result<SpaConfig, ConfigurationError> {
        cfg.costs.rent_tiers = self.admit(&cfg.costs.rent_tiers)?;
        Ok(cfg)
    }
}

/// Built-in tier policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierPolicy {
    /// Keep the schedule as given; diagnostics are only logged.
    #[default]
    Permissive,
    /// Reject overlapping, inverted, or misplaced open-ended tiers.
    Strict,
    /// Sort, clip overlaps, and drop tiers that end up empty.
    Normalize,
}

impl FromStr for TierPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(TierPolicy::Permissive),
            "strict" => Ok(TierPolicy::Strict),
            "normalize" => Ok(TierPolicy::Normalize),
            other => Err(ConfigurationError::UnknownTierPolicy(other.to_string())),
        }
    }
}

impl TierGuard for TierPolicy {
    fn admit(&self, tiers: &[RentTier]) -> Result<Vec<RentTier>, ConfigurationError> {
        let diagnostics = analyze_tiers(tiers);
        for d in &diagnostics {
            warn!(policy = ?self, diagnostic = %d, "rent tier schedule");
        }
        match self {
            TierPolicy::Permissive => Ok(tiers.to_vec()),
            TierPolicy::Strict => match diagnostics.into_iter().find(|d| d.is_conflict()) {
                Some(d) => Err(ConfigurationError::RentTiers(d)),
                None => Ok(tiers.to_vec()),
            },
            TierPolicy::Normalize => Ok(normalize_tiers(tiers)),
        }
    }
}

/// Sort by lower bound and clip each tier so it starts where the previous
/// one ends. Inverted or emptied tiers are dropped, as is anything after an
/// open-ended tier. Gaps are left alone.
pub fn normalize_tiers(tiers: &[RentTier]) -> Vec<RentTier> {
    let mut out: Vec<RentTier> = Vec::with_capacity(tiers.len());
    for t in sorted(tiers) {
        let floor = out.last().map(RentTier::end).unwrap_or(f64::NEG_INFINITY);
        if floor == f64::INFINITY {
            break;
        }
        let min_revenue = t.min_revenue.max(floor);
        if t.end() <= min_revenue {
            continue;
        }
        out.push(RentTier { min_revenue, ..t });
    }
    out
}

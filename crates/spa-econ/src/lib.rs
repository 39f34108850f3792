#![deny(warnings)]

//! Financial calculation engine for the spa model.
//!
//! [`compute`] turns one configuration snapshot into one result snapshot:
//! - capacity of the treatment rooms and thermal circuit
//! - day-by-day revenue with guest mix and combo discounts
//! - progressive rent and the daily cost lines
//! - profit and margin per day and per week
//!
//! The pass is pure: no I/O, no shared state, and the same configuration
//! always yields the same result.

pub mod capacity;
pub mod costs;
pub mod profit;
pub mod rent;
pub mod revenue;

use spa_core::{
    check_degenerate, validate_config, AnnualProjection, EngineError, Financials, SpaConfig,
    WEEKS_PER_YEAR,
};
use tracing::debug;

pub use rent::{progressive_rent, rent_by_tier, TierCharge};

/// Run the whole model for one configuration.
///
/// Fails fast on malformed configurations (wrong array lengths, non-finite
/// numbers) and on cycle lengths that would divide by zero.
pub fn compute(cfg: &SpaConfig) -> Result<Financials, EngineError> {
    validate_config(cfg)?;
    check_degenerate(cfg)?;

    let capacity = capacity::capacity(cfg)?;
    let treatment_count =
        revenue::realized_counts(capacity.daily_treatment_capacity, &cfg.treatment.utilization);
    let thermal_count =
        revenue::realized_counts(capacity.daily_thermal_capacity, &cfg.thermal.utilization);
    debug!(
        treatment = capacity.daily_treatment_capacity,
        thermal = capacity.daily_thermal_capacity,
        "daily capacity"
    );

    let revenue = revenue::weekly_revenue(cfg, &treatment_count, &thermal_count);
    let costs = costs::weekly_costs(&cfg.costs, &revenue, &treatment_count, &thermal_count);
    let profit = profit::aggregate_profit(&revenue, &costs);
    let rent = rent::rent_summary(revenue.totals.total, &cfg.costs);
    debug!(
        revenue = revenue.totals.total,
        costs = costs.totals.total,
        profit = profit.weekly.profit,
        tiered_rent = rent.tiered_annual_rent,
        "weekly totals"
    );

    let annual = AnnualProjection {
        revenue: revenue.totals.total * WEEKS_PER_YEAR,
        costs: costs.totals.total * WEEKS_PER_YEAR,
        profit: profit.weekly.profit * WEEKS_PER_YEAR,
    };
    let utilization = capacity::utilization_summary(&capacity, treatment_count, thermal_count);

    Ok(Financials {
        revenue,
        costs,
        profit,
        capacity,
        utilization,
        rent,
        annual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spa_core::{ConfigurationError, DegenerateConfigurationError};

    #[test]
    fn default_config_computes() {
        let out = compute(&SpaConfig::default()).unwrap();
        assert_eq!(out.capacity.daily_treatment_capacity, 81);
        assert_eq!(out.utilization.treatment_count[0], 56);
        assert_eq!(out.revenue.daily[0].treatment, 8_960.0);
        assert_eq!(out.revenue.daily.len(), 7);
        assert_eq!(out.costs.daily.len(), 7);
        assert_eq!(out.profit.daily.len(), 7);
    }

    #[test]
    fn malformed_config_is_rejected() {
        let mut cfg = SpaConfig::default();
        cfg.treatment.utilization.truncate(5);
        assert_eq!(
            compute(&cfg),
            Err(EngineError::Configuration(ConfigurationError::WeekLength {
                field: "treatment.utilization",
                found: 5
            }))
        );
    }

    #[test]
    fn degenerate_config_is_rejected() {
        let mut cfg = SpaConfig::default();
        cfg.thermal.session_duration = 0.0;
        assert_eq!(
            compute(&cfg),
            Err(EngineError::Degenerate(
                DegenerateConfigurationError::SessionDuration(0.0)
            ))
        );
    }

    #[test]
    fn annual_projection_is_weekly_times_52() {
        let out = compute(&SpaConfig::default()).unwrap();
        assert_eq!(out.annual.revenue, out.revenue.totals.total * 52.0);
        assert_eq!(out.annual.profit, out.profit.weekly.profit * 52.0);
        assert_eq!(out.rent.annual_revenue, out.annual.revenue);
    }
}

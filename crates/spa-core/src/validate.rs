//! Structural validation of a configuration snapshot.
//!
//! Out-of-range percentages are accepted; only shape and finiteness are
//! enforced here. Zero-length cycles are reported separately by
//! [`check_degenerate`] because they are arithmetic rather than structural.

use crate::config::{LaborRole, SpaConfig};
use crate::{ConfigurationError, DegenerateConfigurationError, DAYS_PER_WEEK};

fn check_week(field: &'static str, values: &[f64]) -> Result<(), ConfigurationError> {
    if values.len() != DAYS_PER_WEEK {
        return Err(ConfigurationError::WeekLength {
            field,
            found: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ConfigurationError::NonFinite(field));
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFinite(field))
    }
}

fn check_role(field: &'static str, role: &LaborRole) -> Result<(), ConfigurationError> {
    check_week(field, &role.daily_count)?;
    check_finite(field, role.hourly_rate)?;
    check_finite(field, role.hours_per_shift)
}

/// Validate array lengths and numeric finiteness across every section.
pub fn validate_config(cfg: &SpaConfig) -> Result<(), ConfigurationError> {
    let t = &cfg.treatment;
    check_finite("treatment.capacity.operatingHours", t.capacity.operating_hours)?;
    check_finite("treatment.capacity.treatmentDuration", t.capacity.treatment_duration)?;
    check_finite("treatment.capacity.cleaningTime", t.capacity.cleaning_time)?;
    check_week("treatment.utilization", &t.utilization)?;
    check_week("treatment.hotelPrices", &t.hotel_prices)?;
    check_week("treatment.nonHotelPrices", &t.non_hotel_prices)?;
    check_finite("treatment.hotelGuestPercentage", t.hotel_guest_percentage)?;

    let th = &cfg.thermal;
    check_finite("thermal.operatingHours", th.operating_hours)?;
    check_finite("thermal.sessionDuration", th.session_duration)?;
    check_week("thermal.utilization", &th.utilization)?;
    check_week("thermal.hotelPrices", &th.hotel_prices)?;
    check_week("thermal.nonHotelPrices", &th.non_hotel_prices)?;
    check_week("thermal.comboPercentages", &th.combo_percentages)?;
    check_finite("thermal.hotelGuestPercentage", th.hotel_guest_percentage)?;
    check_finite("thermal.hotelComboDiscount", th.hotel_combo_discount)?;
    check_finite("thermal.nonHotelComboDiscount", th.non_hotel_combo_discount)?;

    check_finite("retail.revenuePercentage", cfg.retail.revenue_percentage)?;

    let c = &cfg.costs;
    check_finite("costs.baseRent", c.base_rent)?;
    for tier in &c.rent_tiers {
        check_finite("costs.rentTiers.minRevenue", tier.min_revenue)?;
        check_finite("costs.rentTiers.percentage", tier.percentage)?;
        // An explicit upper bound must be finite; open brackets use null.
        if let Some(max) = tier.max_revenue {
            check_finite("costs.rentTiers.maxRevenue", max)?;
        }
    }
    check_finite("costs.annualManagementSalary", c.annual_management_salary)?;
    check_finite("costs.weeklyOverhead", c.weekly_overhead)?;
    check_finite("costs.backBarCostPerTreatment", c.back_bar_cost_per_treatment)?;
    check_finite("costs.amenityCostPerGuest", c.amenity_cost_per_guest)?;
    check_finite("costs.retailCOGSPercentage", c.retail_cogs_percentage)?;
    check_finite("costs.treatmentLaborCost", c.treatment_labor_cost)?;
    check_role("costs.attendants", &c.attendants)?;
    check_role("costs.receptionists", &c.receptionists)?;
    check_role("costs.supervisors", &c.supervisors)?;
    Ok(())
}

/// Reject cycle lengths that would divide by zero or go negative.
pub fn check_degenerate(cfg: &SpaConfig) -> Result<(), DegenerateConfigurationError> {
    let cap = &cfg.treatment.capacity;
    let cycle = cap.treatment_duration + cap.cleaning_time;
    if cycle <= 0.0 {
        return Err(DegenerateConfigurationError::TreatmentCycle(cycle));
    }
    if cfg.thermal.session_duration <= 0.0 {
        return Err(DegenerateConfigurationError::SessionDuration(
            cfg.thermal.session_duration,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SpaConfig::default();
        validate_config(&cfg).unwrap();
        check_degenerate(&cfg).unwrap();
    }

    #[test]
    fn short_week_names_the_field() {
        let mut cfg = SpaConfig::default();
        cfg.thermal.combo_percentages.pop();
        assert_eq!(
            validate_config(&cfg),
            Err(ConfigurationError::WeekLength {
                field: "thermal.comboPercentages",
                found: 6
            })
        );
    }

    #[test]
    fn long_labor_week_rejected() {
        let mut cfg = SpaConfig::default();
        cfg.costs.supervisors.daily_count.push(1.0);
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("costs.supervisors"));
    }

    #[test]
    fn nan_price_rejected() {
        let mut cfg = SpaConfig::default();
        cfg.treatment.hotel_prices[3] = f64::NAN;
        assert_eq!(
            validate_config(&cfg),
            Err(ConfigurationError::NonFinite("treatment.hotelPrices"))
        );
    }

    #[test]
    fn out_of_range_percentages_are_accepted() {
        let mut cfg = SpaConfig::default();
        cfg.treatment.utilization[0] = 140.0;
        cfg.thermal.hotel_guest_percentage = -5.0;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn zero_cycle_is_degenerate() {
        let mut cfg = SpaConfig::default();
        cfg.treatment.capacity.treatment_duration = 0.0;
        cfg.treatment.capacity.cleaning_time = 0.0;
        assert_eq!(
            check_degenerate(&cfg),
            Err(DegenerateConfigurationError::TreatmentCycle(0.0))
        );
    }

    #[test]
    fn zero_session_is_degenerate() {
        let mut cfg = SpaConfig::default();
        cfg.thermal.session_duration = 0.0;
        assert!(matches!(
            check_degenerate(&cfg),
            Err(DegenerateConfigurationError::SessionDuration(_))
        ));
    }
}

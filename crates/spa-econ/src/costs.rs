//! Fixed, variable and labor costs per day.

use spa_core::{
    CostInputs, CostLines, CostTotals, DailyCosts, WeeklyCosts, WeeklyRevenue, DAYS_PER_WEEK,
    WEEKS_PER_YEAR,
};
use tracing::trace;

use crate::rent::progressive_rent;

/// What happened on one day, as far as costs are concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DayActivity {
    pub treatments: i64,
    pub thermal_visits: i64,
    pub retail_revenue: f64,
}

/// Costs for `day`.
///
/// Rent is the progressive rent on the week's total revenue annualized,
/// divided back to a single day, so every day carries the same share. The
/// base rent floor is not applied here.
pub fn daily_costs(
    costs: &CostInputs,
    day: usize,
    weekly_revenue_total: f64,
    activity: DayActivity,
) -> DailyCosts {
    let days = DAYS_PER_WEEK as f64;
    let annual_rent = progressive_rent(weekly_revenue_total * WEEKS_PER_YEAR, &costs.rent_tiers);
    let treatments = activity.treatments as f64;
    let guests = (activity.treatments + activity.thermal_visits) as f64;

    let lines = CostLines {
        rent: annual_rent / WEEKS_PER_YEAR / days,
        management: costs.annual_management_salary / WEEKS_PER_YEAR / days,
        back_bar: treatments * costs.back_bar_cost_per_treatment,
        amenities: guests * costs.amenity_cost_per_guest,
        overhead: costs.weekly_overhead / days,
        retail_cogs: activity.retail_revenue * (costs.retail_cogs_percentage / 100.0),
        treatment_labor: treatments * costs.treatment_labor_cost,
        attendant_labor: costs.attendants.daily_cost(day),
        receptionist_labor: costs.receptionists.daily_cost(day),
        supervisor_labor: costs.supervisors.daily_cost(day),
    };
    DailyCosts {
        total: lines.total(),
        lines,
    }
}

/// Costs for the whole week with category totals and a line-item breakdown.
pub fn weekly_costs(
    costs: &CostInputs,
    revenue: &WeeklyRevenue,
    treatment_count: &[i64],
    thermal_count: &[i64],
) -> WeeklyCosts {
    let mut daily = Vec::with_capacity(DAYS_PER_WEEK);
    let mut breakdown = CostLines::default();
    for day in 0..DAYS_PER_WEEK {
        let activity = DayActivity {
            treatments: treatment_count[day],
            thermal_visits: thermal_count[day],
            retail_revenue: revenue.daily[day].retail,
        };
        let day_costs = daily_costs(costs, day, revenue.totals.total, activity);
        trace!(day, total = day_costs.total, rent = day_costs.lines.rent, "daily costs");
        breakdown.accumulate(&day_costs.lines);
        daily.push(day_costs);
    }

    let fixed = breakdown.fixed();
    let variable = breakdown.variable();
    let labor = breakdown.labor();
    WeeklyCosts {
        daily,
        totals: CostTotals {
            fixed,
            variable,
            labor,
            total: fixed + variable + labor,
        },
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spa_core::{DailyRevenue, RevenueTotals, SpaConfig};

    fn flat_revenue(total: f64, retail_per_day: f64) -> WeeklyRevenue {
        WeeklyRevenue {
            daily: vec![
                DailyRevenue {
                    retail: retail_per_day,
                    ..DailyRevenue::default()
                };
                7
            ],
            totals: RevenueTotals {
                total,
                ..RevenueTotals::default()
            },
        }
    }

    #[test]
    fn rent_is_identical_every_day() {
        let costs = SpaConfig::default().costs;
        let week = weekly_costs(&costs, &flat_revenue(60_000.0, 0.0), &[50; 7], &[40; 7]);
        let expected = progressive_rent(60_000.0 * 52.0, &costs.rent_tiers) / 52.0 / 7.0;
        for d in &week.daily {
            assert_eq!(d.lines.rent, expected);
        }
    }

    #[test]
    fn rent_ignores_base_rent_floor() {
        let costs = SpaConfig::default().costs;
        let week = weekly_costs(&costs, &flat_revenue(0.0, 0.0), &[0; 7], &[0; 7]);
        assert_eq!(week.breakdown.rent, 0.0);
    }

    #[test]
    fn monday_line_items() {
        let costs = SpaConfig::default().costs;
        let activity = DayActivity {
            treatments: 56,
            thermal_visits: 49,
            retail_revenue: 1_000.0,
        };
        let d = daily_costs(&costs, 0, 0.0, activity);
        assert_eq!(d.lines.back_bar, 56.0 * 15.0);
        assert_eq!(d.lines.amenities, 105.0 * 10.0);
        assert_eq!(d.lines.treatment_labor, 56.0 * 55.0);
        assert!((d.lines.retail_cogs - 650.0).abs() < 1e-9);
        assert_eq!(d.lines.attendant_labor, 2.0 * 20.0 * 8.0);
        assert_eq!(d.lines.receptionist_labor, 4.0 * 23.0 * 8.0);
        assert_eq!(d.lines.supervisor_labor, 30.0 * 8.0);
        assert!((d.lines.overhead - 8_000.0 / 7.0).abs() < 1e-9);
        assert!((d.lines.management - 170_000.0 / 52.0 / 7.0).abs() < 1e-9);
        assert_eq!(d.total, d.lines.total());
    }

    #[test]
    fn weekend_staffing_uses_that_day() {
        let costs = SpaConfig::default().costs;
        let d = daily_costs(&costs, 5, 0.0, DayActivity::default());
        assert_eq!(d.lines.attendant_labor, 4.0 * 20.0 * 8.0);
        assert_eq!(d.lines.supervisor_labor, 1.5 * 30.0 * 8.0);
    }

    #[test]
    fn category_totals_cover_breakdown() {
        let costs = SpaConfig::default().costs;
        let week = weekly_costs(&costs, &flat_revenue(80_000.0, 500.0), &[60; 7], &[55; 7]);
        let b = &week.breakdown;
        assert!((week.totals.fixed - (b.rent + b.management + b.overhead)).abs() < 1e-9);
        let labor = b.attendant_labor + b.receptionist_labor + b.supervisor_labor;
        assert!((week.totals.labor - labor).abs() < 1e-9);
        let daily_sum: f64 = week.daily.iter().map(|d| d.total).sum();
        assert!((week.totals.total - daily_sum).abs() < 1e-6);
        assert!((b.overhead - 8_000.0).abs() < 1e-9);
    }
}

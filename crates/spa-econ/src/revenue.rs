//! Day-by-day revenue for the treatment, thermal and retail streams.
//!
//! Counts are floored exactly once per stream per day ([`realized_volume`])
//! and once per guest split ([`split_guests`]). Everything else stays in
//! floating point.

use spa_core::{
    DailyRevenue, RevenueTotals, SpaConfig, ThermalInputs, TreatmentInputs, WeeklyRevenue,
    DAYS_PER_WEEK,
};
use tracing::trace;

/// Hotel and non-hotel guests for one stream on one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestSplit {
    pub hotel: i64,
    pub non_hotel: i64,
}

impl GuestSplit {
    /// Revenue at the given per-guest prices.
    pub fn revenue(&self, hotel_price: f64, non_hotel_price: f64) -> f64 {
        self.hotel as f64 * hotel_price + self.non_hotel as f64 * non_hotel_price
    }
}

/// `floor(capacity * utilization / 100)`.
pub fn realized_volume(daily_capacity: i64, utilization_pct: f64) -> i64 {
    (daily_capacity as f64 * (utilization_pct / 100.0)).floor() as i64
}

/// Realized volume for every day of the week.
pub fn realized_counts(daily_capacity: i64, utilization: &[f64]) -> Vec<i64> {
    utilization
        .iter()
        .map(|&pct| realized_volume(daily_capacity, pct))
        .collect()
}

/// Hotel guests are floored; non-hotel guests take the remainder so the two
/// always add up to `volume`.
pub fn split_guests(volume: i64, hotel_guest_pct: f64) -> GuestSplit {
    let hotel = (volume as f64 * (hotel_guest_pct / 100.0)).floor() as i64;
    GuestSplit {
        hotel,
        non_hotel: volume - hotel,
    }
}

/// Treatment revenue on `day` for `volume` treatments.
pub fn daily_treatment_revenue(inputs: &TreatmentInputs, day: usize, volume: i64) -> f64 {
    split_guests(volume, inputs.hotel_guest_percentage)
        .revenue(inputs.hotel_prices[day], inputs.non_hotel_prices[day])
}

/// Thermal revenue on `day` for `volume` visits, after combo discounts.
///
/// Combo guests are split with the general hotel guest percentage. The
/// result is floored at zero when discounts exceed base revenue.
pub fn daily_thermal_revenue(inputs: &ThermalInputs, day: usize, volume: i64) -> f64 {
    let base = split_guests(volume, inputs.hotel_guest_percentage)
        .revenue(inputs.hotel_prices[day], inputs.non_hotel_prices[day]);

    let combo_volume = realized_volume(volume, inputs.combo_percentages[day]);
    let discount = split_guests(combo_volume, inputs.hotel_guest_percentage)
        .revenue(inputs.hotel_combo_discount, inputs.non_hotel_combo_discount);

    (base - discount).max(0.0)
}

/// Weekly revenue given the realized counts per day.
///
/// Retail is a share of the week's treatment + thermal revenue and is spread
/// evenly over the seven days regardless of each day's mix.
pub fn weekly_revenue(
    cfg: &SpaConfig,
    treatment_count: &[i64],
    thermal_count: &[i64],
) -> WeeklyRevenue {
    let mut daily = Vec::with_capacity(DAYS_PER_WEEK);
    let mut treatment_total = 0.0;
    let mut thermal_total = 0.0;
    for day in 0..DAYS_PER_WEEK {
        let treatment = daily_treatment_revenue(&cfg.treatment, day, treatment_count[day]);
        let thermal = daily_thermal_revenue(&cfg.thermal, day, thermal_count[day]);
        treatment_total += treatment;
        thermal_total += thermal;
        daily.push(DailyRevenue {
            treatment,
            thermal,
            ..DailyRevenue::default()
        });
    }

    let retail_total = (treatment_total + thermal_total) * (cfg.retail.revenue_percentage / 100.0);
    let daily_retail = retail_total / DAYS_PER_WEEK as f64;
    for (day, rev) in daily.iter_mut().enumerate() {
        rev.retail = daily_retail;
        rev.total = rev.treatment + rev.thermal + rev.retail;
        trace!(
            day,
            treatment = rev.treatment,
            thermal = rev.thermal,
            total = rev.total,
            "daily revenue"
        );
    }

    WeeklyRevenue {
        daily,
        totals: RevenueTotals {
            treatment: treatment_total,
            thermal: thermal_total,
            retail: retail_total,
            total: treatment_total + thermal_total + retail_total,
        },
    }
}

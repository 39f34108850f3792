//! Result records produced by one calculation pass.
//!
//! A [`Financials`] value is only meaningful for the exact configuration it
//! was computed from; callers replace it wholesale on every change.

use serde::{Deserialize, Serialize};

/// Daily and weekly throughput limits of the two physical resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub daily_treatment_capacity: i64,
    pub weekly_treatment_capacity: i64,
    pub daily_thermal_capacity: i64,
    pub weekly_thermal_capacity: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub treatment: f64,
    pub thermal: f64,
    pub retail: f64,
    pub total: f64,
}

/// Per-stream weekly sums; `total` is the grand total of the three streams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueTotals {
    pub treatment: f64,
    pub thermal: f64,
    pub retail: f64,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRevenue {
    /// Mon..Sun.
    pub daily: Vec<DailyRevenue>,
    pub totals: RevenueTotals,
}

/// Cost line items. Used both for a single day and for the weekly breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLines {
    pub rent: f64,
    pub management: f64,
    pub back_bar: f64,
    pub amenities: f64,
    pub overhead: f64,
    #[serde(rename = "retailCOGS")]
    pub retail_cogs: f64,
    pub treatment_labor: f64,
    pub attendant_labor: f64,
    pub receptionist_labor: f64,
    pub supervisor_labor: f64,
}

impl CostLines {
    /// Sum of all ten line items, in declaration order.
    pub fn total(&self) -> f64 {
        self.rent
            + self.management
            + self.back_bar
            + self.amenities
            + self.overhead
            + self.retail_cogs
            + self.treatment_labor
            + self.attendant_labor
            + self.receptionist_labor
            + self.supervisor_labor
    }

    /// Rent, management and overhead.
    pub fn fixed(&self) -> f64 {
        self.rent + self.management + self.overhead
    }

    /// Back-bar, amenities, retail COGS and treatment labor.
    pub fn variable(&self) -> f64 {
        self.back_bar + self.amenities + self.retail_cogs + self.treatment_labor
    }

    /// Attendant, receptionist and supervisor wages.
    pub fn labor(&self) -> f64 {
        self.attendant_labor + self.receptionist_labor + self.supervisor_labor
    }

    /// Field-wise sum, used to build the weekly breakdown.
    pub fn accumulate(&mut self, other: &CostLines) {
        self.rent += other.rent;
        self.management += other.management;
        self.back_bar += other.back_bar;
        self.amenities += other.amenities;
        self.overhead += other.overhead;
        self.retail_cogs += other.retail_cogs;
        self.treatment_labor += other.treatment_labor;
        self.attendant_labor += other.attendant_labor;
        self.receptionist_labor += other.receptionist_labor;
        self.supervisor_labor += other.supervisor_labor;
    }
}

/// One day's costs: the line items flattened alongside their total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyCosts {
    #[serde(flatten)]
    pub lines: CostLines,
    pub total: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTotals {
    pub fixed: f64,
    pub variable: f64,
    pub labor: f64,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCosts {
    pub daily: Vec<DailyCosts>,
    pub totals: CostTotals,
    /// Each line item summed across the week.
    pub breakdown: CostLines,
}

/// Revenue, cost, profit and margin (percent) for a day or the whole week.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitLine {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub margin: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profit {
    pub daily: Vec<ProfitLine>,
    pub weekly: ProfitLine,
}

/// Realized guest counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilization {
    /// Mon..Sun treatments delivered.
    pub treatment_count: Vec<i64>,
    /// Mon..Sun thermal visits.
    pub thermal_count: Vec<i64>,
    pub weekly_treatment_count: i64,
    pub weekly_thermal_count: i64,
    /// Mean of count / daily capacity over the week, percent. Zero when capacity is zero.
    pub avg_treatment_utilization: f64,
    pub avg_thermal_utilization: f64,
}

/// Annualized rent figures. The floor-adjusted value is for reporting; daily
/// cost rows carry the raw tiered rent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentSummary {
    /// Weekly revenue grand total x 52.
    pub annual_revenue: f64,
    pub tiered_annual_rent: f64,
    pub base_rent: f64,
    /// `max(tiered_annual_rent, base_rent)`.
    pub floor_adjusted_annual_rent: f64,
    /// Floor-adjusted rent as a percent of annual revenue, zero without revenue.
    pub effective_rent_rate: f64,
}

/// Weekly figures scaled to 52 weeks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnualProjection {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

/// Everything derived from one configuration snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub revenue: WeeklyRevenue,
    pub costs: WeeklyCosts,
    pub profit: Profit,
    pub capacity: Capacity,
    pub utilization: Utilization,
    pub rent: RentSummary,
    pub annual: AnnualProjection,
}

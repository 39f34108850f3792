//! Input configuration for one calculation pass.
//!
//! Field names serialize in camelCase so saved documents keep the same shape
//! (`totalBeds`, `hotelGuestPercentage`, `rentTiers`, ...). No section has a
//! serde default: a document missing a section or field fails to parse.

use serde::{Deserialize, Serialize};

/// Physical layout of the treatment rooms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentCapacity {
    /// Number of treatment beds.
    pub total_beds: u32,
    /// Opening hours per day (may be fractional, e.g. 12.25).
    pub operating_hours: f64,
    /// Treatment length in minutes.
    pub treatment_duration: f64,
    /// Turnover time between treatments in minutes.
    pub cleaning_time: f64,
    /// Minutes between staggered treatment starts. Stored only; capacity ignores it.
    pub stagger_interval: f64,
}

/// Treatment stream inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentInputs {
    pub capacity: TreatmentCapacity,
    /// Mon..Sun utilization, percent.
    pub utilization: Vec<f64>,
    /// Mon..Sun price per treatment for hotel guests.
    pub hotel_prices: Vec<f64>,
    /// Mon..Sun price per treatment for non-hotel guests.
    pub non_hotel_prices: Vec<f64>,
    /// Share of guests staying at the hotel, percent.
    pub hotel_guest_percentage: f64,
}

/// Thermal circuit inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalInputs {
    /// Guests admitted at one time.
    pub max_capacity: u32,
    /// Opening hours per day.
    pub operating_hours: f64,
    /// Session length in hours.
    pub session_duration: f64,
    /// Mon..Sun utilization, percent.
    pub utilization: Vec<f64>,
    pub hotel_prices: Vec<f64>,
    pub non_hotel_prices: Vec<f64>,
    pub hotel_guest_percentage: f64,
    /// Flat discount per hotel combo guest.
    pub hotel_combo_discount: f64,
    /// Flat discount per non-hotel combo guest.
    pub non_hotel_combo_discount: f64,
    /// Mon..Sun share of thermal guests buying the treatment combo, percent.
    pub combo_percentages: Vec<f64>,
}

/// Retail inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailInputs {
    /// Retail revenue as a percentage of treatment + thermal revenue.
    pub revenue_percentage: f64,
}

/// One bracket of the progressive rent schedule.
///
/// `max_revenue: None` marks an open-ended top bracket and serializes as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentTier {
    /// Lower bound of annual revenue for this bracket.
    pub min_revenue: f64,
    /// Upper bound of annual revenue, or `None` for unlimited.
    pub max_revenue: Option<f64>,
    /// Rent percentage charged on the slice of revenue inside the bracket.
    pub percentage: f64,
}

impl RentTier {
    /// Upper bound with `None` read as +infinity.
    pub fn end(&self) -> f64 {
        self.max_revenue.unwrap_or(f64::INFINITY)
    }
}

/// Staffing for one labor role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborRole {
    /// Mon..Sun headcount (fractional values allowed for part shifts).
    pub daily_count: Vec<f64>,
    pub hourly_rate: f64,
    pub hours_per_shift: f64,
}

impl LaborRole {
    /// Cost of this role on `day`. Assumes a validated 7-entry `daily_count`.
    pub fn daily_cost(&self, day: usize) -> f64 {
        self.daily_count[day] * self.hourly_rate * self.hours_per_shift
    }
}

/// Fixed, variable and labor cost inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    /// Minimum annual rent. Only the rent summary applies it.
    pub base_rent: f64,
    pub rent_tiers: Vec<RentTier>,
    pub annual_management_salary: f64,
    pub weekly_overhead: f64,
    pub back_bar_cost_per_treatment: f64,
    pub amenity_cost_per_guest: f64,
    #[serde(rename = "retailCOGSPercentage")]
    pub retail_cogs_percentage: f64,
    pub treatment_labor_cost: f64,
    pub attendants: LaborRole,
    pub receptionists: LaborRole,
    pub supervisors: LaborRole,
}

/// Complete configuration snapshot consumed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaConfig {
    pub treatment: TreatmentInputs,
    pub thermal: ThermalInputs,
    pub retail: RetailInputs,
    pub costs: CostInputs,
}

impl Default for SpaConfig {
    /// Baseline property: 9 beds, a 25-guest thermal circuit and six rent tiers.
    fn default() -> Self {
        let labor = |daily_count: [f64; 7], hourly_rate: f64| LaborRole {
            daily_count: daily_count.to_vec(),
            hourly_rate,
            hours_per_shift: 8.0,
        };
        let tier = |min_revenue: f64, max_revenue: Option<f64>, percentage: f64| RentTier {
            min_revenue,
            max_revenue,
            percentage,
        };
        Self {
            treatment: TreatmentInputs {
                capacity: TreatmentCapacity {
                    total_beds: 9,
                    operating_hours: 12.25,
                    treatment_duration: 60.0,
                    cleaning_time: 15.0,
                    stagger_interval: 15.0,
                },
                utilization: vec![70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 85.0],
                hotel_prices: vec![160.0, 160.0, 160.0, 160.0, 180.0, 180.0, 180.0],
                non_hotel_prices: vec![160.0, 160.0, 160.0, 160.0, 180.0, 180.0, 180.0],
                hotel_guest_percentage: 50.0,
            },
            thermal: ThermalInputs {
                max_capacity: 25,
                operating_hours: 10.0,
                session_duration: 3.0,
                utilization: vec![60.0, 65.0, 70.0, 75.0, 85.0, 90.0, 80.0],
                hotel_prices: vec![95.0, 95.0, 95.0, 95.0, 105.0, 105.0, 105.0],
                non_hotel_prices: vec![125.0, 125.0, 125.0, 125.0, 135.0, 135.0, 135.0],
                hotel_guest_percentage: 50.0,
                hotel_combo_discount: 25.0,
                non_hotel_combo_discount: 25.0,
                combo_percentages: vec![30.0, 30.0, 35.0, 35.0, 40.0, 45.0, 35.0],
            },
            retail: RetailInputs {
                revenue_percentage: 12.0,
            },
            costs: CostInputs {
                base_rent: 275_000.0,
                rent_tiers: vec![
                    tier(0.0, Some(1_800_000.0), 5.0),
                    tier(1_800_000.0, Some(2_500_000.0), 6.0),
                    tier(2_500_000.0, Some(3_000_000.0), 7.0),
                    tier(3_000_000.0, Some(4_500_000.0), 8.0),
                    tier(4_500_000.0, Some(6_000_000.0), 9.0),
                    tier(6_000_000.0, None, 10.0),
                ],
                annual_management_salary: 170_000.0,
                weekly_overhead: 8_000.0,
                back_bar_cost_per_treatment: 15.0,
                amenity_cost_per_guest: 10.0,
                retail_cogs_percentage: 65.0,
                treatment_labor_cost: 55.0,
                attendants: labor([2.0, 2.0, 2.0, 2.0, 4.0, 4.0, 4.0], 20.0),
                receptionists: labor([4.0; 7], 23.0),
                supervisors: labor([1.0, 1.0, 1.0, 1.0, 1.5, 1.5, 1.5], 30.0),
            },
        }
    }
}

/// Saved scenario wrapping a configuration with a name and description.
///
/// Extra fields in stored documents (timestamps) are ignored on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub inputs: SpaConfig,
}

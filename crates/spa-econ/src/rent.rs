//! Progressive (bracket-style) rent.
//!
//! Each tier's percentage applies only to the slice of annual revenue that
//! falls inside `[min_revenue, max_revenue)`. Tiers are sorted by lower bound
//! before accumulating; gaps are charged nothing and overlaps are charged by
//! every tier that covers them.

use spa_core::{CostInputs, RentSummary, RentTier, WEEKS_PER_YEAR};

/// Rent owed to one tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierCharge {
    pub tier: RentTier,
    /// Revenue falling inside the tier.
    pub taxable: f64,
    /// `taxable * percentage / 100`.
    pub rent: f64,
}

/// Revenue of `annual_revenue` that falls inside `tier`, capped at the tier width.
pub fn taxable_in_tier(annual_revenue: f64, tier: &RentTier) -> f64 {
    if annual_revenue <= tier.min_revenue {
        return 0.0;
    }
    let amount = (annual_revenue - tier.min_revenue).min(tier.end() - tier.min_revenue);
    // Inverted tiers contribute nothing rather than a credit.
    amount.max(0.0)
}

/// Per-tier charges in ascending `min_revenue` order.
pub fn rent_by_tier(annual_revenue: f64, tiers: &[RentTier]) -> Vec<TierCharge> {
    let mut ordered = tiers.to_vec();
    ordered.sort_by(|a, b| a.min_revenue.total_cmp(&b.min_revenue));
    ordered
        .into_iter()
        .map(|tier| {
            let taxable = taxable_in_tier(annual_revenue, &tier);
            TierCharge {
                tier,
                taxable,
                rent: taxable * (tier.percentage / 100.0),
            }
        })
        .collect()
}

/// Annual rent owed on `annual_revenue`.
pub fn progressive_rent(annual_revenue: f64, tiers: &[RentTier]) -> f64 {
    rent_by_tier(annual_revenue, tiers)
        .iter()
        .map(|c| c.rent)
        .sum()
}

/// Annual rent figures for reporting, with the base rent floor applied.
pub fn rent_summary(weekly_revenue_total: f64, costs: &CostInputs) -> RentSummary {
    let annual_revenue = weekly_revenue_total * WEEKS_PER_YEAR;
    let tiered = progressive_rent(annual_revenue, &costs.rent_tiers);
    let floor_adjusted = tiered.max(costs.base_rent);
    let effective_rent_rate = if annual_revenue > 0.0 {
        floor_adjusted / annual_revenue * 100.0
    } else {
        0.0
    };
    RentSummary {
        annual_revenue,
        tiered_annual_rent: tiered,
        base_rent: costs.base_rent,
        floor_adjusted_annual_rent: floor_adjusted,
        effective_rent_rate,
    }
}

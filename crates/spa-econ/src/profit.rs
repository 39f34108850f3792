//! Profit and margin from revenue and cost totals.

use spa_core::{Profit, ProfitLine, WeeklyCosts, WeeklyRevenue};

/// Profit as a percentage of revenue; zero when there is no revenue.
pub fn margin(revenue: f64, profit: f64) -> f64 {
    if revenue > 0.0 {
        (profit / revenue) * 100.0
    } else {
        0.0
    }
}

pub fn profit_line(revenue: f64, costs: f64) -> ProfitLine {
    let profit = revenue - costs;
    ProfitLine {
        revenue,
        costs,
        profit,
        margin: margin(revenue, profit),
    }
}

/// Per-day and weekly profit.
pub fn aggregate_profit(revenue: &WeeklyRevenue, costs: &WeeklyCosts) -> Profit {
    let daily = revenue
        .daily
        .iter()
        .zip(&costs.daily)
        .map(|(r, c)| profit_line(r.total, c.total))
        .collect();
    Profit {
        daily,
        weekly: profit_line(revenue.totals.total, costs.totals.total),
    }
}

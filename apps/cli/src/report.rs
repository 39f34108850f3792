//! Plain-text weekly report.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use spa_core::{Financials, SpaConfig, WEEK};
use spa_econ::rent_by_tier;

/// Whole-currency amount with thousands separators, e.g. `$1,234` or `-$56`.
pub fn usd(amount: f64) -> String {
    let Some(d) = Decimal::from_f64(amount) else {
        return format!("${amount}");
    };
    let rounded = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Render the KPI line, day table, cost breakdown and rent summary.
pub fn render(cfg: &SpaConfig, out: &Financials) -> String {
    let mut s = String::new();
    let w = &out.profit.weekly;
    s.push_str(&format!(
        "Week | revenue: {} | costs: {} | profit: {} | margin: {}\n",
        usd(w.revenue),
        usd(w.costs),
        usd(w.profit),
        pct(w.margin)
    ));
    s.push_str(&format!(
        "Capacity | treatments/day: {} | thermal/day: {} | avg utilization: {} / {}\n\n",
        out.capacity.daily_treatment_capacity,
        out.capacity.daily_thermal_capacity,
        pct(out.utilization.avg_treatment_utilization),
        pct(out.utilization.avg_thermal_utilization)
    ));

    s.push_str(&format!(
        "{:<4} {:>6} {:>6} {:>11} {:>11} {:>10} {:>11} {:>11} {:>11} {:>7}\n",
        "Day",
        "Treat",
        "Therm",
        "Treatment",
        "Thermal",
        "Retail",
        "Revenue",
        "Costs",
        "Profit",
        "Margin"
    ));
    for (i, day) in WEEK.iter().enumerate() {
        let rev = &out.revenue.daily[i];
        let p = &out.profit.daily[i];
        s.push_str(&format!(
            "{:<4} {:>6} {:>6} {:>11} {:>11} {:>10} {:>11} {:>11} {:>11} {:>7}\n",
            day.to_string(),
            out.utilization.treatment_count[i],
            out.utilization.thermal_count[i],
            usd(rev.treatment),
            usd(rev.thermal),
            usd(rev.retail),
            usd(p.revenue),
            usd(p.costs),
            usd(p.profit),
            pct(p.margin)
        ));
    }

    let b = &out.costs.breakdown;
    let t = &out.costs.totals;
    s.push_str(&format!(
        "\nCosts | fixed: {} | variable: {} | labor: {}\n",
        usd(t.fixed),
        usd(t.variable),
        usd(t.labor)
    ));
    for (label, value) in [
        ("rent", b.rent),
        ("management", b.management),
        ("overhead", b.overhead),
        ("back bar", b.back_bar),
        ("amenities", b.amenities),
        ("retail COGS", b.retail_cogs),
        ("treatment labor", b.treatment_labor),
        ("attendants", b.attendant_labor),
        ("receptionists", b.receptionist_labor),
        ("supervisors", b.supervisor_labor),
    ] {
        s.push_str(&format!("  {label:<16} {:>11}\n", usd(value)));
    }

    let r = &out.rent;
    s.push_str(&format!(
        "\nRent | annual revenue: {} | tiered: {} | base: {} | reported: {} | effective rate: {}\n",
        usd(r.annual_revenue),
        usd(r.tiered_annual_rent),
        usd(r.base_rent),
        usd(r.floor_adjusted_annual_rent),
        pct(r.effective_rent_rate)
    ));
    for charge in rent_by_tier(r.annual_revenue, &cfg.costs.rent_tiers) {
        let upper = charge
            .tier
            .max_revenue
            .map(usd)
            .unwrap_or_else(|| "and up".to_string());
        s.push_str(&format!(
            "  {:>12} - {:<12} @ {:>5} on {:>12} = {:>10}\n",
            usd(charge.tier.min_revenue),
            upper,
            pct(charge.tier.percentage),
            usd(charge.taxable),
            usd(charge.rent)
        ));
    }

    let a = &out.annual;
    s.push_str(&format!(
        "\nAnnual | revenue: {} | costs: {} | profit: {}\n",
        usd(a.revenue),
        usd(a.costs),
        usd(a.profit)
    ));
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_and_rounds() {
        assert_eq!(usd(0.0), "$0");
        assert_eq!(usd(999.4), "$999");
        assert_eq!(usd(1_234.5), "$1,235");
        assert_eq!(usd(1_000_000.0), "$1,000,000");
        assert_eq!(usd(-56.2), "-$56");
        assert_eq!(usd(-0.2), "$0");
    }

    #[test]
    fn report_lists_every_day() {
        let cfg = SpaConfig::default();
        let out = spa_econ::compute(&cfg).unwrap();
        let text = render(&cfg, &out);
        for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
            assert!(text.contains(day), "missing {day}");
        }
        assert!(text.contains("$8,960"));
        assert!(text.contains("and up"));
    }
}

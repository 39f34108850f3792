use spa_core::{RentTier, Scenario, SpaConfig};
use spa_econ::{compute, progressive_rent};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn default_monday_figures() {
    let out = compute(&SpaConfig::default()).unwrap();
    assert_eq!(out.capacity.daily_treatment_capacity, 81);
    assert_eq!(out.capacity.daily_thermal_capacity, 83);
    assert_eq!(out.utilization.treatment_count[0], 56);
    assert_eq!(out.utilization.thermal_count[0], 49);
    assert_eq!(out.revenue.daily[0].treatment, 8_960.0);
    assert_eq!(out.revenue.daily[0].thermal, 5_055.0);
}

#[test]
fn weekly_aggregates_match_daily_sums() {
    let out = compute(&SpaConfig::default()).unwrap();
    let r = &out.revenue;
    let sum = |f: fn(&spa_core::DailyRevenue) -> f64| r.daily.iter().map(f).sum::<f64>();
    assert!(close(sum(|d| d.treatment), r.totals.treatment));
    assert!(close(sum(|d| d.thermal), r.totals.thermal));
    assert!(close(sum(|d| d.retail), r.totals.retail));
    assert!(close(sum(|d| d.total), r.totals.total));
    assert!(close(
        r.totals.total,
        r.totals.treatment + r.totals.thermal + r.totals.retail
    ));

    let daily_costs: f64 = out.costs.daily.iter().map(|d| d.total).sum();
    assert!(close(daily_costs, out.costs.totals.total));
    let daily_profit: f64 = out.profit.daily.iter().map(|d| d.profit).sum();
    assert!(close(daily_profit, out.profit.weekly.profit));
}

#[test]
fn counts_sum_to_weekly_counts() {
    let out = compute(&SpaConfig::default()).unwrap();
    let u = &out.utilization;
    assert_eq!(u.treatment_count, vec![56, 60, 64, 68, 72, 76, 68]);
    assert_eq!(u.weekly_treatment_count, u.treatment_count.iter().sum::<i64>());
    assert!(u.avg_treatment_utilization > 0.0 && u.avg_treatment_utilization <= 100.0);
}

#[test]
fn json_round_trip_gives_identical_result() {
    let cfg = SpaConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    let back: SpaConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(compute(&back).unwrap(), compute(&cfg).unwrap());
}

#[test]
fn same_config_same_result() {
    let mut cfg = SpaConfig::default();
    cfg.thermal.combo_percentages = vec![55.0; 7];
    cfg.retail.revenue_percentage = 20.0;
    assert_eq!(compute(&cfg).unwrap(), compute(&cfg).unwrap());
}

#[test]
fn daily_rent_is_flat_share_of_annualized_rent() {
    let cfg = SpaConfig::default();
    let out = compute(&cfg).unwrap();
    let annual = progressive_rent(out.revenue.totals.total * 52.0, &cfg.costs.rent_tiers);
    for d in &out.costs.daily {
        assert_eq!(d.lines.rent, annual / 52.0 / 7.0);
    }
    assert_eq!(out.rent.tiered_annual_rent, annual);
    assert_eq!(
        out.rent.floor_adjusted_annual_rent,
        annual.max(cfg.costs.base_rent)
    );
}

#[test]
fn base_rent_floor_only_shows_in_summary() {
    let mut cfg = SpaConfig::default();
    cfg.costs.base_rent = 10_000_000.0;
    let out = compute(&cfg).unwrap();
    assert_eq!(out.rent.floor_adjusted_annual_rent, 10_000_000.0);
    assert!(out.costs.breakdown.rent * 52.0 < 10_000_000.0);
}

#[test]
fn closed_week_has_zero_margin() {
    let mut cfg = SpaConfig::default();
    cfg.treatment.utilization = vec![0.0; 7];
    cfg.thermal.utilization = vec![0.0; 7];
    let out = compute(&cfg).unwrap();
    assert_eq!(out.revenue.totals.total, 0.0);
    assert_eq!(out.profit.weekly.margin, 0.0);
    assert!(out.profit.weekly.profit < 0.0);
    assert!(out.profit.daily.iter().all(|d| d.margin == 0.0));
    assert_eq!(out.rent.effective_rent_rate, 0.0);
}

#[test]
fn scenario_document_computes() {
    let doc = r#"{
        "id": "scenario_1",
        "name": "Gap schedule",
        "description": "tiers with a hole",
        "inputs": INPUTS
    }"#;
    let mut cfg = SpaConfig::default();
    cfg.costs.rent_tiers = vec![
        RentTier {
            min_revenue: 0.0,
            max_revenue: Some(1_000_000.0),
            percentage: 5.0,
        },
        RentTier {
            min_revenue: 2_000_000.0,
            max_revenue: None,
            percentage: 8.0,
        },
    ];
    let inputs = serde_json::to_string(&cfg).unwrap();
    let scenario: Scenario = serde_json::from_str(&doc.replace("INPUTS", &inputs)).unwrap();
    let out = compute(&scenario.inputs).unwrap();
    let annual = out.revenue.totals.total * 52.0;
    let expected = 50_000.0 + (annual - 2_000_000.0).max(0.0) * 0.08;
    assert!(close(out.rent.tiered_annual_rent, expected));
}

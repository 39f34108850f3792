//! Daily throughput of the treatment rooms and the thermal circuit.

use spa_core::{
    Capacity, DegenerateConfigurationError, SpaConfig, ThermalInputs, TreatmentCapacity,
    Utilization, DAYS_PER_WEEK,
};

/// Treatments per day: `beds * floor(operating minutes / (duration + cleaning))`.
///
/// Partial cycles at the end of the day do not count. The stagger interval is
/// not part of the formula.
pub fn treatment_capacity(cap: &TreatmentCapacity) -> Result<i64, DegenerateConfigurationError> {
    let cycle = cap.treatment_duration + cap.cleaning_time;
    if cycle <= 0.0 {
        return Err(DegenerateConfigurationError::TreatmentCycle(cycle));
    }
    let per_bed = ((cap.operating_hours * 60.0) / cycle).floor();
    Ok(i64::from(cap.total_beds) * per_bed as i64)
}

/// Thermal visits per day: `floor(max guests * (operating hours / session length))`.
pub fn thermal_capacity(thermal: &ThermalInputs) -> Result<i64, DegenerateConfigurationError> {
    if thermal.session_duration <= 0.0 {
        return Err(DegenerateConfigurationError::SessionDuration(
            thermal.session_duration,
        ));
    }
    let sessions_per_day = thermal.operating_hours / thermal.session_duration;
    Ok((f64::from(thermal.max_capacity) * sessions_per_day).floor() as i64)
}

/// Both capacities, daily and over seven days.
pub fn capacity(cfg: &SpaConfig) -> Result<Capacity, DegenerateConfigurationError> {
    let treatment = treatment_capacity(&cfg.treatment.capacity)?;
    let thermal = thermal_capacity(&cfg.thermal)?;
    let days = DAYS_PER_WEEK as i64;
    Ok(Capacity {
        daily_treatment_capacity: treatment,
        weekly_treatment_capacity: treatment * days,
        daily_thermal_capacity: thermal,
        weekly_thermal_capacity: thermal * days,
    })
}

fn average_share(counts: &[i64], daily_capacity: i64) -> f64 {
    if daily_capacity == 0 {
        return 0.0;
    }
    let cap = daily_capacity as f64;
    counts.iter().map(|&c| c as f64 / cap * 100.0).sum::<f64>() / DAYS_PER_WEEK as f64
}

/// Weekly counts and average realized utilization from per-day counts.
pub fn utilization_summary(
    capacity: &Capacity,
    treatment_count: Vec<i64>,
    thermal_count: Vec<i64>,
) -> Utilization {
    Utilization {
        weekly_treatment_count: treatment_count.iter().sum(),
        weekly_thermal_count: thermal_count.iter().sum(),
        avg_treatment_utilization: average_share(
            &treatment_count,
            capacity.daily_treatment_capacity,
        ),
        avg_thermal_utilization: average_share(&thermal_count, capacity.daily_thermal_capacity),
        treatment_count,
        thermal_count,
    }
}

use crate::{
    cli::HosArgs,
    core::day_log::DayLog,
    prelude::*,
    quantity::{Hours, Meters, Miles, Seconds},
};

/// Split a trip's driving time into daily logs.
///
/// Greedy day-by-day allocation: every day gets the most driving that fits
/// under the daily cap, the driving left to do, and the hours left in the
/// duty cycle, whichever is smallest. Fuel stops are owed once per interval
/// of the total distance and assigned to the earliest days, one per day;
/// stops that do not fit into the schedule are dropped.
///
/// The returned days are numbered from 1 without gaps. The schedule never
/// exceeds `max_schedule_days`, so a driver with an exhausted cycle gets
/// zero-driving waiting days up to the cap rather than an endless schedule.
#[instrument(
    skip_all,
    fields(driving_time = %driving_time, distance = %distance, cycle_hours_used = %cycle_hours_used),
)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_logs(
    rules: &HosArgs,
    driving_time: Seconds,
    distance: Meters,
    cycle_hours_used: Hours,
) -> Vec<DayLog> {
    let distance = Miles::from(distance);
    let total_fuel_stops = if distance > Miles::ZERO {
        (distance.0 / rules.fuel_stop_interval.0).ceil() as u32
    } else {
        0
    };

    let mut remaining_driving = Hours::from(driving_time);
    let mut remaining_cycle = (rules.cycle_limit - cycle_hours_used).max(Hours::ZERO);
    let mut assigned_fuel_stops = 0;
    let mut logs = Vec::new();

    let mut day = 1;
    // The second disjunct guarantees a day-1 log for a zero-driving trip
    // that still owes a fuel stop.
    while remaining_driving > Hours::ZERO || (day == 1 && total_fuel_stops != 0) {
        let allowed = rules.max_daily_driving.min(remaining_driving).min(remaining_cycle);
        // Log resolution is 0.01 h; round before subtracting so the emitted
        // hours, not the exact ones, are what gets deducted.
        let driving_hours = allowed.round_centi();
        remaining_driving = (remaining_driving - driving_hours).max(Hours::ZERO);
        remaining_cycle = (remaining_cycle - driving_hours).max(Hours::ZERO);

        let fuel_stops = u32::from(assigned_fuel_stops < total_fuel_stops);
        assigned_fuel_stops += fuel_stops;

        let rest_hours = (Hours::FULL_DAY - driving_hours - rules.on_duty_overhead)
            .max(Hours::ZERO)
            .round_centi();

        logs.push(DayLog { day, driving_hours, rest_hours, fuel_stops });

        day += 1;
        if day > rules.max_schedule_days {
            // An exhausted cycle stalls the allowance at zero while driving
            // remains, hence the hard cutoff.
            break;
        }
    }

    debug!(n_days = logs.len(), total_fuel_stops, assigned_fuel_stops, "planned");
    logs
}

use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{cli::HosArgs, core::day_log::DayLog, quantity::Hours};

#[must_use]
pub fn build_day_logs_table(logs: &[DayLog], rules: &HosArgs) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Day", "Driving", "Rest", "Fuel stops"]);
    for log in logs {
        table.add_row(vec![
            Cell::new(log.day),
            Cell::new(log.driving_hours).set_alignment(CellAlignment::Right).fg(
                if log.driving_hours == Hours::ZERO {
                    // Waiting day: the cycle ran out before the driving did.
                    Color::Red
                } else if log.driving_hours == rules.max_daily_driving {
                    Color::DarkYellow
                } else {
                    Color::Reset
                },
            ),
            Cell::new(log.rest_hours).set_alignment(CellAlignment::Right),
            Cell::new(log.fuel_stops).set_alignment(CellAlignment::Right).fg(
                if log.fuel_stops == 0 { Color::Reset } else { Color::Green },
            ),
        ]);
    }
    table
}

use clap::{Parser, Subcommand};

use crate::quantity::{Hours, Miles};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: geocode the stops, fetch the route, and lay out the daily logs.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Development tools.
    #[clap(name = "probe")]
    Probe(Box<ProbeArgs>),
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Where the truck is right now (free-text address).
    #[clap(long, env = "CURRENT_LOCATION")]
    pub current_location: String,

    /// Pickup address.
    #[clap(long, env = "PICKUP_LOCATION")]
    pub pickup_location: String,

    /// Dropoff address.
    #[clap(long, env = "DROPOFF_LOCATION")]
    pub dropoff_location: String,

    /// Hours already spent in the current duty cycle.
    #[clap(long, default_value = "0", env = "CYCLE_HOURS_USED")]
    pub cycle_hours_used: Hours,

    /// Print the full trip plan as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub hos: HosArgs,
}

/// Hours-of-Service regime. The defaults model the US property-carrying
/// rules in a simplified form: an 11-hour daily driving cap within a
/// 70-hour rolling cycle.
#[derive(Copy, Clone, Parser)]
pub struct HosArgs {
    /// Daily driving cap.
    #[clap(long = "max-daily-driving-hours", default_value = "11", env = "MAX_DAILY_DRIVING_HOURS")]
    pub max_daily_driving: Hours,

    /// Total on-duty budget for the rolling cycle.
    #[clap(long = "cycle-limit-hours", default_value = "70", env = "CYCLE_LIMIT_HOURS")]
    pub cycle_limit: Hours,

    /// Non-driving on-duty time per trip: one hour each for pickup and dropoff.
    #[clap(long = "on-duty-overhead-hours", default_value = "2", env = "ON_DUTY_OVERHEAD_HOURS")]
    pub on_duty_overhead: Hours,

    /// Refuel at least once per this many miles.
    #[clap(long = "fuel-stop-interval-miles", default_value = "1000", env = "FUEL_STOP_INTERVAL_MILES")]
    pub fuel_stop_interval: Miles,

    /// Hard cap on the number of scheduled days.
    #[clap(long = "max-schedule-days", default_value = "14", env = "MAX_SCHEDULE_DAYS")]
    pub max_schedule_days: u32,
}

#[derive(Parser)]
pub struct ProbeArgs {
    #[command(subcommand)]
    pub command: ProbeCommand,
}

#[derive(Subcommand)]
pub enum ProbeCommand {
    /// Geocode a free-text address.
    Geocode {
        address: String,
    },

    /// Fetch the raw route summary for the three stops.
    Route {
        current_location: String,
        pickup_location: String,
        dropoff_location: String,
    },
}

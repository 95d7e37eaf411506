mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;
mod trip;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{Geocoder, nominatim, osrm},
    cli::{Args, Command, ProbeCommand},
    core::planner::generate_logs,
    prelude::*,
    tables::build_day_logs_table,
    trip::{TripPlan, resolve_route},
};

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Args::parse().command {
        Command::Plan(args) => {
            let geocoder = nominatim::Api::try_new()?;
            let router = osrm::Api::try_new()?;
            let route = resolve_route(
                &geocoder,
                &router,
                &args.current_location,
                &args.pickup_location,
                &args.dropoff_location,
            )
            .await
            .context("failed to resolve the route")?;
            info!(distance = %route.distance, duration = %route.duration, "resolved the route");

            let logs = generate_logs(&args.hos, route.duration, route.distance, args.cycle_hours_used);
            info!(n_days = logs.len(), "planned the trip");

            if args.json {
                let plan = TripPlan {
                    planned_at: Local::now(),
                    cycle_hours_used: args.cycle_hours_used,
                    route,
                    logs,
                };
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}", build_day_logs_table(&logs, &args.hos));
            }
            Ok(())
        }

        Command::Probe(args) => match args.command {
            ProbeCommand::Geocode { address } => {
                let coordinate = nominatim::Api::try_new()?.geocode(&address).await?;
                info!(%coordinate, "gotcha");
                Ok(())
            }

            ProbeCommand::Route { current_location, pickup_location, dropoff_location } => {
                let geocoder = nominatim::Api::try_new()?;
                let router = osrm::Api::try_new()?;
                let route = resolve_route(
                    &geocoder,
                    &router,
                    &current_location,
                    &pickup_location,
                    &dropoff_location,
                )
                .await?;
                info!(
                    distance = %route.distance,
                    duration = %route.duration,
                    n_geometry_points = route.geometry.len(),
                    "gotcha"
                );
                Ok(())
            }
        },
    }
}

pub mod day_log;
pub mod planner;
pub mod route;

mod distance;
mod time;

pub use self::{
    distance::{Meters, Miles},
    time::{Hours, Seconds},
};

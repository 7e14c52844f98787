//! Pure computations over a [`PriceSeries`](crate::PriceSeries).

mod aggregate;
mod charging;
mod combine;
mod stats;
mod window;

pub use aggregate::{aggregate, to_hourly};
pub use charging::{cheapest_charging_window, ChargingWindow};
pub use combine::concat;
pub use stats::{compute_statistics, Statistics};
pub use window::{cheapest_window, WindowResult};

//! Swedish electricity spot prices from the elprisetjustnu.se API, with
//! statistics and a search for the cheapest contiguous charging window.
//!
//! ```no_run
//! use elpris::{compute_statistics, query_prices, to_hourly, PriceZone};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
//! let prices = to_hourly(&query_prices(PriceZone::Se3, date).await?)?;
//! let stats = compute_statistics(&prices)?;
//! println!("average: {} SEK/kWh", stats.average);
//! # Ok(())
//! # }
//! ```

mod analysis;
mod client;
mod error;
pub mod format;
pub mod input;
mod price;
mod zone;

pub use analysis::{
    aggregate, cheapest_charging_window, cheapest_window, compute_statistics, concat, to_hourly,
    ChargingWindow, Statistics, WindowResult,
};
pub use client::{
    prices_url, query_prices, query_prices_from, query_prices_or_empty, query_prices_with,
    DEFAULT_API_BASE,
};
pub use error::{AnalysisError, ElprisError, InputError};
pub use input::ChargingDuration;
pub use price::{PriceRecord, PriceSeries};
pub use zone::PriceZone;

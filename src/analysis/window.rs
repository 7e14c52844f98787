use chrono::DateTime;
use chrono_tz::Tz;

use crate::{AnalysisError, PriceRecord, PriceSeries};

/// The cheapest contiguous run of records found by [`cheapest_window`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult {
    /// Index of the first record of the window
    pub start_index: usize,
    /// Number of consecutive records in the window
    pub window_length: usize,
    pub total_price: f64,
    pub average_price: f64,
}

impl WindowResult {
    /// The records of `series` covered by this window, `None` if the window
    /// does not lie within `series`.
    pub fn records<'a>(&self, series: &'a PriceSeries) -> Option<&'a [PriceRecord]> {
        if self.window_length == 0 {
            return None;
        }
        let end = self.start_index.checked_add(self.window_length)?;
        series.records().get(self.start_index..end)
    }

    pub fn start(&self, series: &PriceSeries) -> Option<DateTime<Tz>> {
        self.records(series)?.first().map(|r| r.start)
    }

    pub fn end(&self, series: &PriceSeries) -> Option<DateTime<Tz>> {
        self.records(series)?.last().map(|r| r.end)
    }
}

/// Finds the contiguous run of `length` records with the lowest total price.
///
/// Every window is summed on its own, so windows holding the same prices get
/// bit-identical totals. A later window only replaces the current best if its
/// total is strictly lower, so the earliest start wins on ties.
pub fn cheapest_window(series: &PriceSeries, length: usize) -> Result<WindowResult, AnalysisError> {
    if length == 0 || series.len() < length {
        return Err(AnalysisError::InsufficientData {
            requested: length,
            available: series.len(),
        });
    }

    let prices = series.iter().map(|r| r.price_per_kwh).collect::<Vec<_>>();

    let mut best_start = 0;
    let mut best_sum = f64::INFINITY;
    for (start, window) in prices.windows(length).enumerate() {
        let sum: f64 = window.iter().sum();
        if start == 0 || sum < best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    Ok(WindowResult {
        start_index: best_start,
        window_length: length,
        total_price: best_sum,
        average_price: best_sum / length as f64,
    })
}

use crate::{AnalysisError, PriceRecord, PriceSeries};

/// Descriptive statistics over a [`PriceSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Unrounded arithmetic mean of all prices
    pub average: f64,
    /// Cheapest record, the earliest one on ties
    pub minimum: PriceRecord,
    /// Most expensive record, the earliest one on ties
    pub maximum: PriceRecord,
}

/// Computes average, minimum and maximum in a single pass.
///
/// Fails with [`AnalysisError::EmptySeries`] rather than reporting a zero
/// price for a series without data.
pub fn compute_statistics(series: &PriceSeries) -> Result<Statistics, AnalysisError> {
    let mut records = series.iter();
    let first = records.next().ok_or(AnalysisError::EmptySeries)?;

    let mut sum = first.price_per_kwh;
    let mut minimum = first;
    let mut maximum = first;

    for record in records {
        sum += record.price_per_kwh;
        if record.price_per_kwh < minimum.price_per_kwh {
            minimum = record;
        }
        if record.price_per_kwh > maximum.price_per_kwh {
            maximum = record;
        }
    }

    Ok(Statistics {
        average: sum / series.len() as f64,
        minimum: minimum.clone(),
        maximum: maximum.clone(),
    })
}

use chrono::Duration;
use tracing::debug;

use crate::{AnalysisError, PriceRecord, PriceSeries};

/// Merges every `bucket_size` consecutive records into one record whose price
/// is the mean of its inputs and whose interval spans all of them.
///
/// The series length must be a multiple of `bucket_size`; trailing partial
/// buckets are not dropped or shortened, they are an error. An empty series
/// aggregates to an empty series.
pub fn aggregate(series: &PriceSeries, bucket_size: usize) -> Result<PriceSeries, AnalysisError> {
    if bucket_size == 0 || series.len() % bucket_size != 0 {
        return Err(AnalysisError::MisalignedGranularity {
            len: series.len(),
            bucket_size,
        });
    }

    Ok(series
        .records()
        .chunks_exact(bucket_size)
        .map(|bucket| {
            let sum: f64 = bucket.iter().map(|r| r.price_per_kwh).sum();
            // chunks_exact never yields an empty bucket
            let first = &bucket[0];
            let last = &bucket[bucket.len() - 1];
            PriceRecord::new(first.start, last.end, sum / bucket_size as f64)
        })
        .collect())
}

/// Aggregates a sub-hourly series into hourly records.
///
/// Series that are empty, already hourly or coarser are returned unchanged.
pub fn to_hourly(series: &PriceSeries) -> Result<PriceSeries, AnalysisError> {
    let hour = Duration::hours(1);
    let granularity = match series.granularity() {
        Some(granularity) if granularity < hour => granularity,
        _ => return Ok(series.clone()),
    };

    let minutes = granularity.num_minutes();
    if minutes <= 0 || 60 % minutes != 0 {
        return Err(AnalysisError::UnsupportedGranularity { minutes });
    }

    let bucket_size = (60 / minutes) as usize;
    debug!(bucket_size, records = series.len(), "aggregating to hourly prices");
    aggregate(series, bucket_size)
}

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// A single price observation for a fixed time interval.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Start time of this interval
    pub start: DateTime<Tz>,
    /// End time of this interval
    pub end: DateTime<Tz>,
    /// Price in SEK per kWh. Spot prices can be negative.
    pub price_per_kwh: f64,
}

impl PriceRecord {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>, price_per_kwh: f64) -> Self {
        Self {
            start,
            end,
            price_per_kwh,
        }
    }

    /// Length of the interval this price applies to.
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}

/// An ordered sequence of [`PriceRecord`]s, increasing by `start`.
///
/// Records within one day are contiguous. A series built with
/// [`concat`](crate::concat) is not checked for gaps at the seam.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<PriceRecord> {
        self.records
    }

    /// Interval length of the records in this series, taken from the first
    /// record. `None` for an empty series.
    pub fn granularity(&self) -> Option<Duration> {
        self.records.first().map(PriceRecord::duration)
    }

    /// Records ordered from most to least expensive. Records with equal
    /// prices stay in chronological order.
    pub fn sorted_by_price_desc(&self) -> Vec<&PriceRecord> {
        let mut sorted = self.records.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.price_per_kwh.total_cmp(&a.price_per_kwh));
        sorted
    }
}

impl From<Vec<PriceRecord>> for PriceSeries {
    fn from(records: Vec<PriceRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<PriceRecord> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for PriceSeries {
    type Item = PriceRecord;
    type IntoIter = std::vec::IntoIter<PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceRecord;
    type IntoIter = std::slice::Iter<'a, PriceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Builds a contiguous series starting at midnight of 2025-09-29 in Stockholm,
/// one record per price, each `minutes` long.
#[cfg(test)]
pub(crate) fn series_of(prices: &[f64], minutes: i64) -> PriceSeries {
    use chrono::TimeZone;
    use chrono_tz::Europe::Stockholm;

    let midnight = Stockholm.with_ymd_and_hms(2025, 9, 29, 0, 0, 0).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let start = midnight + Duration::minutes(minutes * i as i64);
            PriceRecord::new(start, start + Duration::minutes(minutes), price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity() {
        assert_eq!(series_of(&[1.0, 2.0], 15).granularity(), Some(Duration::minutes(15)));
        assert_eq!(series_of(&[1.0], 60).granularity(), Some(Duration::hours(1)));
        assert_eq!(PriceSeries::default().granularity(), None);
    }

    #[test]
    fn test_sorted_by_price_desc() {
        let series = series_of(&[0.5, 2.0, -0.1, 2.0, 1.0], 60);

        let sorted = series
            .sorted_by_price_desc()
            .into_iter()
            .map(|r| (r.start.format("%H").to_string(), r.price_per_kwh))
            .collect::<Vec<_>>();

        assert_eq!(
            sorted,
            vec![
                ("01".to_owned(), 2.0),
                ("03".to_owned(), 2.0),
                ("04".to_owned(), 1.0),
                ("00".to_owned(), 0.5),
                ("02".to_owned(), -0.1),
            ]
        );
    }
}

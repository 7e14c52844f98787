use chrono::DateTime;
use chrono_tz::Tz;

use crate::{cheapest_window, concat, AnalysisError, ChargingDuration, PriceSeries, WindowResult};

/// When to charge, as found by [`cheapest_charging_window`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub window: WindowResult,
}

/// Finds the cheapest time to charge for `duration`, starting on `today` and
/// allowed to run past midnight into `next_day`.
///
/// `next_day` may be empty when its prices are not published yet; the window
/// then has to fit within `today`. The window length in records follows the
/// interval length of `today`.
pub fn cheapest_charging_window(
    today: PriceSeries,
    next_day: PriceSeries,
    duration: ChargingDuration,
) -> Result<ChargingWindow, AnalysisError> {
    let series = concat(today, next_day);

    let granularity = series
        .granularity()
        .ok_or(AnalysisError::InsufficientData {
            requested: duration.hours() as usize,
            available: 0,
        })?;
    let length = duration
        .window_length(granularity)
        .ok_or(AnalysisError::UnsupportedGranularity {
            minutes: granularity.num_minutes(),
        })?;

    let window = cheapest_window(&series, length)?;
    let records = window.records(&series).ok_or(AnalysisError::InsufficientData {
        requested: length,
        available: series.len(),
    })?;

    match (records.first(), records.last()) {
        (Some(first), Some(last)) => Ok(ChargingWindow {
            start: first.start,
            end: last.end,
            window,
        }),
        _ => Err(AnalysisError::InsufficientData {
            requested: length,
            available: series.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::series_of;
    use chrono::TimeZone;
    use chrono_tz::Europe::Stockholm;

    /// Two hourly days, 2025-09-29 and 2025-09-30, split at midnight.
    fn two_days(prices: &[f64]) -> (PriceSeries, PriceSeries) {
        let mut today = series_of(prices, 60).into_records();
        let next_day = today.split_off(24);
        (today.into(), next_day.into())
    }

    #[test]
    fn test_charging_window_across_midnight() {
        let mut prices = vec![1.0; 48];
        prices[22] = 0.1;
        prices[23] = 0.2;
        prices[24] = 0.1;
        prices[25] = 0.3;
        let (today, next_day) = two_days(&prices);

        let charging = cheapest_charging_window(today, next_day, ChargingDuration::FourHours).unwrap();

        assert_eq!(charging.window.start_index, 22);
        assert_eq!(charging.window.window_length, 4);
        assert_eq!(
            charging.start,
            Stockholm.with_ymd_and_hms(2025, 9, 29, 22, 0, 0).unwrap()
        );
        assert_eq!(
            charging.end,
            Stockholm.with_ymd_and_hms(2025, 9, 30, 2, 0, 0).unwrap()
        );
        assert!((charging.window.average_price - 0.175).abs() < 1e-12);
    }

    #[test]
    fn test_charging_window_without_next_day() {
        let mut prices = vec![1.0; 48];
        prices[23] = 0.0;
        prices[24] = 0.0;
        prices[5] = 0.5;
        prices[6] = 0.5;
        let (today, _) = two_days(&prices);

        let charging =
            cheapest_charging_window(today, PriceSeries::default(), ChargingDuration::TwoHours)
                .unwrap();

        assert_eq!(charging.window.start_index, 5);
        assert_eq!(charging.window.total_price, 1.0);
    }

    #[test]
    fn test_charging_window_quarter_hours() {
        let mut prices = vec![1.0; 96];
        for price in &mut prices[40..48] {
            *price = 0.25;
        }
        let today = series_of(&prices, 15);

        let charging =
            cheapest_charging_window(today, PriceSeries::default(), ChargingDuration::TwoHours)
                .unwrap();

        assert_eq!(charging.window.window_length, 8);
        assert_eq!(charging.window.start_index, 40);
        assert_eq!(charging.start.format("%H:%M").to_string(), "10:00");
        assert_eq!(charging.end.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn test_charging_window_insufficient_data() {
        let today = series_of(&[1.0, 2.0, 3.0], 60);

        assert_eq!(
            cheapest_charging_window(today, PriceSeries::default(), ChargingDuration::FourHours),
            Err(AnalysisError::InsufficientData {
                requested: 4,
                available: 3
            })
        );
        assert!(matches!(
            cheapest_charging_window(
                PriceSeries::default(),
                PriceSeries::default(),
                ChargingDuration::TwoHours
            ),
            Err(AnalysisError::InsufficientData { available: 0, .. })
        ));
    }

    #[test]
    fn test_charging_window_unsupported_granularity() {
        let today = series_of(&[1.0; 10], 25);

        assert_eq!(
            cheapest_charging_window(today, PriceSeries::default(), ChargingDuration::TwoHours),
            Err(AnalysisError::UnsupportedGranularity { minutes: 25 })
        );
    }
}

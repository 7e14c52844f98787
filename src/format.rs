//! Presentation helpers. Every formatter takes its configuration as an
//! argument; nothing here holds global state.

use chrono::{DateTime, Duration, TimeZone};

/// Unit a SEK/kWh price is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    /// Öre per kWh (1 SEK = 100 öre)
    Ore,
    /// SEK per kWh
    Sek,
}

impl PriceUnit {
    fn scale(&self) -> f64 {
        match self {
            PriceUnit::Ore => 100.0,
            PriceUnit::Sek => 1.0,
        }
    }

    pub const fn suffix(&self) -> &'static str {
        match self {
            PriceUnit::Ore => "öre",
            PriceUnit::Sek => "kr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub precision: usize,
    pub unit: PriceUnit,
}

impl NumberFormat {
    /// Swedish convention: decimal comma, two decimals, prices in öre.
    pub const SWEDISH: NumberFormat = NumberFormat {
        decimal_separator: ',',
        precision: 2,
        unit: PriceUnit::Ore,
    };
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::SWEDISH
    }
}

/// Formats a price given in SEK/kWh, e.g. `0.1234` becomes `"12,34 öre"` with
/// [`NumberFormat::SWEDISH`].
pub fn format_price(price_per_kwh: f64, format: &NumberFormat) -> String {
    let value = format!(
        "{:.*}",
        format.precision,
        price_per_kwh * format.unit.scale()
    );
    let value = if format.decimal_separator == '.' {
        value
    } else {
        value.replace('.', &format.decimal_separator.to_string())
    };
    format!("{value} {}", format.unit.suffix())
}

/// Formats an interval as its start and end hours, e.g. `"07-08"`.
pub fn format_hour_range<TZ>(start: &DateTime<TZ>, end: &DateTime<TZ>) -> String
where
    TZ: TimeZone,
    TZ::Offset: std::fmt::Display,
{
    format!("{}-{}", start.format("%H"), end.format("%H"))
}

/// Formats an interval for display: whole hours as `"07-08"`, shorter
/// intervals with minutes as `"07:15-07:30"`.
pub fn format_interval<TZ>(start: &DateTime<TZ>, end: &DateTime<TZ>) -> String
where
    TZ: TimeZone,
    TZ::Offset: std::fmt::Display,
{
    if end.clone().signed_duration_since(start.clone()) < Duration::hours(1) {
        format!("{}-{}", format_time(start), format_time(end))
    } else {
        format_hour_range(start, end)
    }
}

pub fn format_time<TZ>(time: &DateTime<TZ>) -> String
where
    TZ: TimeZone,
    TZ::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Stockholm;

    #[test]
    fn test_format_price_swedish() {
        assert_eq!(format_price(0.1234, &NumberFormat::SWEDISH), "12,34 öre");
        assert_eq!(format_price(-0.005, &NumberFormat::SWEDISH), "-0,50 öre");
        assert_eq!(format_price(1.0, &NumberFormat::default()), "100,00 öre");
    }

    #[test]
    fn test_format_price_custom() {
        let format = NumberFormat {
            decimal_separator: '.',
            precision: 3,
            unit: PriceUnit::Sek,
        };
        assert_eq!(format_price(0.1234, &format), "0.123 kr");

        let format = NumberFormat {
            precision: 0,
            ..NumberFormat::SWEDISH
        };
        assert_eq!(format_price(0.5, &format), "50 öre");
    }

    #[test]
    fn test_format_hour_range() {
        let start = Stockholm.with_ymd_and_hms(2025, 9, 29, 23, 0, 0).unwrap();
        let end = start + Duration::hours(1);

        assert_eq!(format_hour_range(&start, &end), "23-00");
        assert_eq!(format_time(&start), "23:00");
    }

    #[test]
    fn test_format_interval() {
        let start = Stockholm.with_ymd_and_hms(2025, 9, 29, 7, 15, 0).unwrap();

        assert_eq!(
            format_interval(&start, &(start + Duration::minutes(15))),
            "07:15-07:30"
        );
        assert_eq!(
            format_interval(&start, &(start + Duration::hours(1))),
            "07-08"
        );
    }
}

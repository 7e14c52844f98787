use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Europe::Stockholm;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{ElprisError, PriceRecord, PriceSeries, PriceZone};

/// Base URL of the public elprisetjustnu.se price API.
pub const DEFAULT_API_BASE: &str = "https://www.elprisetjustnu.se";

impl TryFrom<ElprisDataItem> for PriceRecord {
    type Error = ElprisError;

    fn try_from(item: ElprisDataItem) -> Result<Self, Self::Error> {
        let start = parse_timestamp(&item.time_start)?;
        let end = parse_timestamp(&item.time_end)?;

        if end <= start {
            return Err(ElprisError::UnsupportedResponse(format!(
                "interval ends before it starts: {} - {}",
                item.time_start, item.time_end
            )));
        }

        Ok(PriceRecord::new(
            start.with_timezone(&Stockholm),
            end.with_timezone(&Stockholm),
            item.sek_per_kwh,
        ))
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, ElprisError> {
    DateTime::parse_from_rfc3339(s).map_err(|e| {
        ElprisError::UnsupportedResponse(format!("parsing timestamp {s} failed: {e:?}"))
    })
}

#[derive(Deserialize)]
struct ElprisDataItem {
    #[serde(rename = "SEK_per_kWh")]
    sek_per_kwh: f64,
    time_start: String,
    time_end: String,
}

/// Returns the URL serving the prices of `zone` on `date` below `api_base`.
pub fn prices_url(api_base: &str, zone: PriceZone, date: NaiveDate) -> String {
    format!(
        "{}/api/v1/prices/{}_{}.json",
        api_base.trim_end_matches('/'),
        date.format("%Y/%m-%d"),
        zone.code()
    )
}

/// Query the prices of `zone` on `date` from the public API.
///
/// Days that are not published yet are returned as an empty series. The
/// request is sent once and not retried.
pub async fn query_prices(zone: PriceZone, date: NaiveDate) -> Result<PriceSeries, ElprisError> {
    query_prices_from(DEFAULT_API_BASE, zone, date).await
}

/// Like [`query_prices`], but against the API served at `api_base`.
pub async fn query_prices_from(
    api_base: &str,
    zone: PriceZone,
    date: NaiveDate,
) -> Result<PriceSeries, ElprisError> {
    query_prices_with(&reqwest::Client::new(), api_base, zone, date).await
}

/// Like [`query_prices_from`], sending the request through `client`.
pub async fn query_prices_with(
    client: &reqwest::Client,
    api_base: &str,
    zone: PriceZone,
    date: NaiveDate,
) -> Result<PriceSeries, ElprisError> {
    let url = prices_url(api_base, zone, date);
    debug!(%url, "requesting prices");

    let response = client.get(&url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        warn!(%zone, %date, "no prices published");
        return Ok(PriceSeries::default());
    }

    let items = response
        .error_for_status()?
        .json::<Vec<ElprisDataItem>>()
        .await?;

    let series = items
        .into_iter()
        .map(PriceRecord::try_from)
        .collect::<Result<PriceSeries, _>>()?;
    debug!(%zone, %date, records = series.len(), "received prices");

    Ok(series)
}

/// Like [`query_prices_with`], but a failed request is logged and treated as a
/// day without prices.
pub async fn query_prices_or_empty(
    client: &reqwest::Client,
    api_base: &str,
    zone: PriceZone,
    date: NaiveDate,
) -> PriceSeries {
    match query_prices_with(client, api_base, zone, date).await {
        Ok(series) => series,
        Err(e) => {
            warn!(%zone, %date, "fetching prices failed, continuing without them: {e}");
            PriceSeries::default()
        }
    }
}

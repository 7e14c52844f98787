use std::process::ExitCode;

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Europe::Stockholm;
use clap::Parser;
use elpris::format::{format_interval, format_price, format_time, NumberFormat};
use elpris::input::{parse_charging_duration, parse_date, parse_zone};
use elpris::{
    cheapest_charging_window, compute_statistics, query_prices_or_empty, query_prices_with,
    to_hourly, AnalysisError, ChargingDuration, ElprisError, PriceSeries, PriceZone,
    DEFAULT_API_BASE,
};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Electricity spot prices for a Swedish price zone.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Price zone (SE1, SE2, SE3 or SE4)
    #[arg(long, env = "ELPRIS_ZONE", value_parser = parse_zone, default_value = "SE3")]
    zone: PriceZone,

    /// Date to show prices for (YYYY-MM-DD), defaults to today in Stockholm
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Find the cheapest charging window of the given length (2h, 4h or 8h)
    #[arg(long, value_parser = parse_charging_duration)]
    charging: Option<ChargingDuration>,

    /// List prices from most to least expensive
    #[arg(long)]
    sorted: bool,

    /// Keep the resolution of the API instead of averaging into hours
    #[arg(long)]
    raw: bool,

    /// Base URL of the price API
    #[arg(long, env = "ELPRIS_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("fetching prices failed")]
    Fetch(#[from] ElprisError),
    #[error("analysing prices failed: {0}")]
    Analysis(#[from] AnalysisError),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("elpris=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                CliError::Fetch(source) => error!("{e}: {source:?}"),
                CliError::Analysis(_) => error!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let date = args
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&Stockholm).date_naive());
    let format = NumberFormat::SWEDISH;
    let client = reqwest::Client::new();

    info!(zone = %args.zone, %date, "fetching prices");
    let prices = fetch(&client, &args, date).await?;

    println!("Elpriser för {} den {}", args.zone, date);
    if prices.is_empty() {
        println!("Inga priser tillgängliga.");
        return Ok(());
    }

    let stats = compute_statistics(&prices)?;
    println!("Medelpris: {}", format_price(stats.average, &format));
    println!(
        "Lägsta pris: {} {}",
        format_interval(&stats.minimum.start, &stats.minimum.end),
        format_price(stats.minimum.price_per_kwh, &format)
    );
    println!(
        "Högsta pris: {} {}",
        format_interval(&stats.maximum.start, &stats.maximum.end),
        format_price(stats.maximum.price_per_kwh, &format)
    );

    if args.sorted {
        println!();
        for record in prices.sorted_by_price_desc() {
            println!(
                "{} {}",
                format_interval(&record.start, &record.end),
                format_price(record.price_per_kwh, &format)
            );
        }
    }

    if let Some(duration) = args.charging {
        let next_date = date + Duration::days(1);
        let next_day =
            query_prices_or_empty(&client, &args.api_base, args.zone, next_date).await;
        let next_day = match resample(next_day, args.raw) {
            Ok(next_day) => next_day,
            Err(e) => {
                warn!(%next_date, "charging window limited to {date}: {e}");
                PriceSeries::default()
            }
        };
        println!();
        print_charging_window(prices, next_day, duration, &format)?;
    }

    Ok(())
}

async fn fetch(
    client: &reqwest::Client,
    args: &Args,
    date: NaiveDate,
) -> Result<PriceSeries, CliError> {
    let prices = query_prices_with(client, &args.api_base, args.zone, date).await?;
    Ok(resample(prices, args.raw)?)
}

fn resample(prices: PriceSeries, raw: bool) -> Result<PriceSeries, AnalysisError> {
    if raw {
        Ok(prices)
    } else {
        to_hourly(&prices)
    }
}

fn print_charging_window(
    today: PriceSeries,
    next_day: PriceSeries,
    duration: ChargingDuration,
    format: &NumberFormat,
) -> Result<(), CliError> {
    match cheapest_charging_window(today, next_day, duration) {
        Ok(charging) => {
            println!(
                "Påbörja laddning ({duration}) kl {} (klar {})",
                format_time(&charging.start),
                format_time(&charging.end)
            );
            println!(
                "Medelpris för fönster: {}",
                format_price(charging.window.average_price, format)
            );
            Ok(())
        }
        Err(AnalysisError::InsufficientData { available, .. }) => {
            println!("För få priser ({available}) för laddning i {duration}.");
            Ok(())
        }
        Err(AnalysisError::UnsupportedGranularity { minutes }) => {
            println!("Laddningsfönster på {duration} passar inte intervall på {minutes} minuter.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

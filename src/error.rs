use thiserror::Error;

/// Errors returned by the price client.
#[derive(Error, Debug)]
pub enum ElprisError {
    #[error("http request error")]
    Reqwest(#[from] reqwest::Error),
    #[error("api responded with an unsupported response: {0}")]
    UnsupportedResponse(String),
}

/// Errors returned by the analysis functions over a [`PriceSeries`](crate::PriceSeries).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("price series is empty")]
    EmptySeries,
    #[error("window of {requested} records requested, but only {available} available")]
    InsufficientData { requested: usize, available: usize },
    #[error("series of {len} records can not be split into buckets of {bucket_size}")]
    MisalignedGranularity { len: usize, bucket_size: usize },
    #[error("intervals of {minutes} minutes do not fit evenly into the requested span")]
    UnsupportedGranularity { minutes: i64 },
}

/// Errors returned when validating user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown zone {0}, expected one of SE1, SE2, SE3, SE4")]
    UnknownZone(String),
    #[error("invalid date {0}, expected the format YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid charging duration {0}, expected one of 2h, 4h, 8h")]
    InvalidChargingDuration(String),
}

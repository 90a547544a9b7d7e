use thiserror::Error;

/// Errors surfaced by the partitioning engine.
///
/// Only malformed input is fatal. Configuration anomalies (an interval
/// table that leaves an hour uncovered) and geometric degeneracies
/// (a trim that would produce a non-positive length) are logged and
/// degraded instead of raised.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A time or duration string could not be parsed as `HH:MM:SS`.
    #[error("invalid time string '{0}': expected HH:MM:SS with ':' or '.' delimiters")]
    InvalidTime(String),

    /// The recording duration was negative.
    #[error("recording duration must not be negative, got '{0}'")]
    NegativeDuration(String),

    /// The maximum continuous read length must be positive.
    #[error("max read length must be greater than zero hours")]
    InvalidReadLength,

    /// `max_samples_per_file` of zero would make file slicing impossible.
    #[error("max samples per file must be greater than zero")]
    InvalidSamplesPerFile,
}

pub type Result<T> = std::result::Result<T, PartitionError>;

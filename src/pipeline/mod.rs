//! The partitioning pipeline
//!
//! A recording flows left to right through five stages with no feedback:
//! raw sample generation, segment splitting, block grouping, boundary
//! trimming, file slicing. Every stage is a total function of its input;
//! the whole pipeline is pure and can run concurrently for independent
//! recordings without synchronization.

pub mod blocks;
pub mod generate;
pub mod slicer;
pub mod split;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock;
use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::intervals::DayInterval;

pub use slicer::{OutputFile, OutputSample};

/// The immutable input: when the recording began (time of day, measured
/// from midnight of day 0) and how long it ran.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Recording {
    pub start_offset: TimeDelta,
    pub total_duration: TimeDelta,
}

impl Recording {
    pub fn end(&self) -> TimeDelta {
        self.start_offset + self.total_duration
    }
}

/// One readable unit of the recording, in absolute time since midnight
/// of day 0. Raw samples and split segments share this shape; the
/// splitter guarantees `length <= max_read_length` downstream of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sample {
    pub index: usize,
    pub start: TimeDelta,
    pub length: TimeDelta,
    pub label: String,
}

/// One recording to partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionRequest {
    /// Time of day the recording began, `HH:MM:SS`.
    pub start_time: String,
    /// Total recording length, `HH:MM:SS` (hours may exceed 23).
    pub duration: String,
    /// Identifier used in output filenames.
    pub patient_id: String,
    /// Period-of-day table; `None` uses the configured default.
    pub intervals: Option<Vec<DayInterval>>,
    /// Explicit per-day analysis windows; when present they replace
    /// interval-based coverage entirely.
    pub sample_windows: Option<Vec<(String, String)>>,
    /// Label samples with literal clock ranges instead of interval names.
    pub use_custom_intervals: bool,
}

impl PartitionRequest {
    pub fn new(
        start_time: impl Into<String>,
        duration: impl Into<String>,
        patient_id: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            duration: duration.into(),
            patient_id: patient_id.into(),
            intervals: None,
            sample_windows: None,
            use_custom_intervals: false,
        }
    }

    pub fn with_windows(mut self, windows: Vec<(String, String)>) -> Self {
        self.sample_windows = Some(windows);
        self
    }

    pub fn with_intervals(mut self, intervals: Vec<DayInterval>) -> Self {
        self.intervals = Some(intervals);
        self
    }

    pub fn with_custom_interval_labels(mut self) -> Self {
        self.use_custom_intervals = true;
        self
    }
}

/// Partition one recording into ordered output-file descriptors.
///
/// Fails fast on unparseable time strings, a negative duration, or
/// unusable limits. Configuration anomalies and degenerate geometry are
/// logged and degraded instead; see the stage modules.
pub fn partition(request: &PartitionRequest, config: &PartitionConfig) -> Result<Vec<OutputFile>> {
    if config.max_read_length_hours <= 0 {
        return Err(PartitionError::InvalidReadLength);
    }
    if config.max_samples_per_file == 0 {
        return Err(PartitionError::InvalidSamplesPerFile);
    }

    let start_offset = clock::parse_hms(&request.start_time)?;
    if start_offset < TimeDelta::zero() {
        return Err(PartitionError::InvalidTime(request.start_time.clone()));
    }
    let total_duration = clock::parse_hms(&request.duration)?;
    if total_duration < TimeDelta::zero() {
        return Err(PartitionError::NegativeDuration(request.duration.clone()));
    }

    info!(
        "partitioning recording for {}: start={}, duration={}",
        request.patient_id, request.start_time, request.duration
    );

    let recording = Recording {
        start_offset,
        total_duration,
    };
    let intervals = request
        .intervals
        .as_deref()
        .unwrap_or(config.default_intervals.as_slice());

    let raw = match request.sample_windows.as_deref() {
        Some(windows) if !windows.is_empty() => {
            generate::window_samples(recording, windows)?
        }
        _ => generate::interval_samples(recording, intervals, request.use_custom_intervals),
    };

    let segments = split::split_long_samples(raw, config.max_read_length());
    let segment_count = segments.len();
    let grouped = blocks::group_blocks(segments, config.max_read_length());
    let trimmed = blocks::trim_blocks(grouped, recording, config);
    let files = slicer::slice_files(&trimmed, &request.patient_id, config.max_samples_per_file);

    info!(
        "generated {} segments -> {} files (<= {}h per block)",
        segment_count,
        files.len(),
        config.max_read_length_hours
    );
    Ok(files)
}

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::intervals::{default_intervals, DayInterval};

/// Configuration for the partitioning engine with tunable limits.
///
/// The two hard limits come from the analysis device: it cannot read
/// more than `max_read_length_hours` of data in one pass and cannot
/// address more than `max_samples_per_file` samples in one file. The
/// two buffer offsets paper over its off-by-one behavior at block edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Maximum continuous device read, in hours.
    pub max_read_length_hours: i64,

    /// Maximum number of samples addressable in one output file.
    pub max_samples_per_file: usize,

    /// Seconds added to the start of each block's first sample.
    pub first_sample_buffer_secs: i64,

    /// Seconds the last sample of a multi-sample block is moved earlier.
    pub last_sample_lead_secs: i64,

    /// Period-of-day table used when the caller passes no intervals.
    pub default_intervals: Vec<DayInterval>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            max_read_length_hours: 60,
            max_samples_per_file: 15,
            first_sample_buffer_secs: 1,
            last_sample_lead_secs: 2,
            default_intervals: default_intervals(),
        }
    }
}

impl PartitionConfig {
    /// Config with custom device limits and default buffers.
    pub fn with_limits(max_read_length_hours: i64, max_samples_per_file: usize) -> Self {
        Self {
            max_read_length_hours,
            max_samples_per_file,
            ..Default::default()
        }
    }

    pub(crate) fn max_read_length(&self) -> TimeDelta {
        TimeDelta::hours(self.max_read_length_hours)
    }
}

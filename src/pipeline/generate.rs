//! Raw sample generation
//!
//! Two mutually exclusive modes. Window mode reapplies caller-supplied
//! clock windows once per calendar day and trusts them completely:
//! windows may overlap or leave gaps. Interval mode walks the recording
//! from start to end along period-of-day boundaries and guarantees full
//! non-overlapping coverage with no gaps.

use chrono::TimeDelta;
use tracing::debug;

use crate::clock;
use crate::error::Result;
use crate::intervals::{interval_label, next_interval_end, DayInterval};
use crate::pipeline::{Recording, Sample};

/// Emit one sample per (calendar day x window), clipped to the recording.
///
/// Window bounds accept the lenient clock form (`"07:00"` pads to
/// `"07:00:00"`); labels keep the caller's literal strings. A window
/// whose clipped span is empty or ends before the recording begins is
/// skipped silently.
pub(crate) fn window_samples(
    recording: Recording,
    windows: &[(String, String)],
) -> Result<Vec<Sample>> {
    let end = recording.end();
    let total_days = end.num_seconds() / 86_400 + 1;

    let mut samples = Vec::new();
    let mut index = 1;
    for day in 0..total_days {
        for (window_start, window_end) in windows {
            let day_offset = TimeDelta::days(day);
            let abs_start = day_offset + clock::parse_clock(window_start)?;
            let abs_end = day_offset + clock::parse_clock(window_end)?;

            // Clip the window to the recording's bounds.
            let sample_start = abs_start.max(recording.start_offset);
            let sample_end = abs_end.min(end);
            if sample_start >= sample_end || sample_end <= recording.start_offset {
                continue;
            }

            samples.push(Sample {
                index,
                start: sample_start,
                length: sample_end - sample_start,
                label: format!("Day {} {}-{}", day + 1, window_start, window_end),
            });
            index += 1;
        }
    }

    debug!(
        "window mode: {} samples from {} windows over {} days",
        samples.len(),
        windows.len(),
        total_days
    );
    Ok(samples)
}

/// Walk the recording along interval boundaries, one sample per
/// contiguous period-of-day stretch.
pub(crate) fn interval_samples(
    recording: Recording,
    intervals: &[DayInterval],
    use_custom_intervals: bool,
) -> Vec<Sample> {
    let end = recording.end();
    let mut samples = Vec::new();
    let mut index = 1;
    let mut t = recording.start_offset;

    while t < end {
        let day_num = t.num_seconds() / 86_400 + 1;
        let hour = ((t.num_seconds() / 3600) % 24) as u32;
        let label = interval_label(hour, intervals, use_custom_intervals);
        let sample_end = next_interval_end(t, intervals).min(end);

        samples.push(Sample {
            index,
            start: t,
            length: sample_end - t,
            label: format!("Day {day_num} {label}"),
        });
        t = sample_end;
        index += 1;
    }

    debug!("interval mode: {} samples", samples.len());
    samples
}

//! Clock-string parsing and formatting
//!
//! All timestamps crossing the API boundary are `HH:MM:SS` strings with
//! either `:` or `.` as delimiter. Hours are unbounded so multi-day
//! offsets (e.g. `"148:00:00"`) round-trip unchanged. Internally the
//! engine works in signed [`TimeDelta`] only.

use chrono::TimeDelta;

use crate::error::{PartitionError, Result};

fn split_parts(s: &str) -> Result<Vec<i64>> {
    let mut parts = Vec::new();
    for (i, piece) in s.split(|c| c == ':' || c == '.').enumerate() {
        let value: i64 = piece
            .trim()
            .parse()
            .map_err(|_| PartitionError::InvalidTime(s.to_string()))?;
        // Only the hour part may carry a sign, so a negative duration
        // still parses and can be rejected with a precise error upstream.
        if value < 0 && i > 0 {
            return Err(PartitionError::InvalidTime(s.to_string()));
        }
        parts.push(value);
    }
    if parts.is_empty() || parts.len() > 3 {
        return Err(PartitionError::InvalidTime(s.to_string()));
    }
    Ok(parts)
}

fn to_delta(parts: &[i64]) -> TimeDelta {
    let magnitude = parts[0].abs() * 3600 + parts[1] * 60 + parts[2];
    if parts[0] < 0 {
        TimeDelta::seconds(-magnitude)
    } else {
        TimeDelta::seconds(magnitude)
    }
}

/// Parse a strict three-part `HH:MM:SS` string.
///
/// Used for recording start times and durations, where a truncated
/// string almost certainly means upstream OCR garbage. The result may
/// be negative; callers reject that with their own error.
pub fn parse_hms(s: &str) -> Result<TimeDelta> {
    let parts = split_parts(s)?;
    if parts.len() != 3 {
        return Err(PartitionError::InvalidTime(s.to_string()));
    }
    Ok(to_delta(&parts))
}

/// Parse a lenient clock string: missing minute/second parts default to zero.
///
/// Caller-supplied sample windows are often written as `"07:00"` or even
/// `"7"`; this pads them out the same way the strict form would read.
/// Window bounds have no use for negative times, so those are rejected here.
pub fn parse_clock(s: &str) -> Result<TimeDelta> {
    let mut parts = split_parts(s)?;
    while parts.len() < 3 {
        parts.push(0);
    }
    let delta = to_delta(&parts);
    if delta < TimeDelta::zero() {
        return Err(PartitionError::InvalidTime(s.to_string()));
    }
    Ok(delta)
}

/// Format a delta as canonical `HH:MM:SS`, hours unbounded.
pub fn format_hms(td: TimeDelta) -> String {
    let total = td.num_seconds();
    let (hours, rem) = (total / 3600, total % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

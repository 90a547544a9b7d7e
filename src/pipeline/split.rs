//! Segment splitting
//!
//! Any raw sample longer than the maximum continuous read is cut into
//! consecutive pieces of at most that length. Samples at or under the
//! limit pass through unchanged apart from re-indexing.

use chrono::TimeDelta;
use tracing::debug;

use crate::clock::format_hms;
use crate::pipeline::Sample;

/// Cut over-long samples down to `max_read_length`, re-indexing the
/// whole sequence 1..N.
///
/// When a sample splits, each piece inherits the parent label with its
/// own ` (start - end)` sub-range appended so the audit trail shows
/// which slice of the original period it covers.
pub(crate) fn split_long_samples(samples: Vec<Sample>, max_read_length: TimeDelta) -> Vec<Sample> {
    let mut out: Vec<Sample> = Vec::with_capacity(samples.len());

    for sample in samples {
        if sample.length <= max_read_length {
            out.push(Sample {
                index: out.len() + 1,
                ..sample
            });
            continue;
        }

        let pieces = (sample.length.num_seconds() + max_read_length.num_seconds() - 1)
            / max_read_length.num_seconds();
        debug!(
            "splitting '{}' ({}) into {} segments",
            sample.label,
            format_hms(sample.length),
            pieces
        );

        let mut seg_start = sample.start;
        let mut remaining = sample.length;
        while remaining > TimeDelta::zero() {
            let cur_len = remaining.min(max_read_length);
            out.push(Sample {
                index: out.len() + 1,
                start: seg_start,
                length: cur_len,
                label: format!(
                    "{} ({} - {})",
                    sample.label,
                    format_hms(seg_start),
                    format_hms(seg_start + cur_len)
                ),
            });
            seg_start = seg_start + cur_len;
            remaining = remaining - cur_len;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(start_h: i64, len_h: i64, label: &str) -> Sample {
        Sample {
            index: 1,
            start: TimeDelta::hours(start_h),
            length: TimeDelta::hours(len_h),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_short_sample_passes_through() {
        let out = split_long_samples(vec![sample(8, 12, "Day 1 day")], TimeDelta::hours(60));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "Day 1 day");
        assert_eq!(out[0].length, TimeDelta::hours(12));
    }

    #[test]
    fn test_65h_sample_splits_into_60_and_5() {
        let out = split_long_samples(vec![sample(0, 65, "Day 1 24h")], TimeDelta::hours(60));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].length, TimeDelta::hours(60));
        assert_eq!(out[1].length, TimeDelta::hours(5));
        assert_eq!(out[1].start, TimeDelta::hours(60));
        assert_eq!(out[0].label, "Day 1 24h (00:00:00 - 60:00:00)");
        assert_eq!(out[1].label, "Day 1 24h (60:00:00 - 65:00:00)");
    }

    #[test]
    fn test_exact_multiple_splits_cleanly() {
        let out = split_long_samples(vec![sample(0, 120, "x")], TimeDelta::hours(60));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|s| s.length == TimeDelta::hours(60)));
    }

    #[test]
    fn test_no_segment_exceeds_limit_and_indices_run_1_to_n() {
        let input = vec![sample(0, 65, "a"), sample(65, 10, "b"), sample(75, 130, "c")];
        let max = TimeDelta::hours(60);
        let out = split_long_samples(input, max);
        for (i, s) in out.iter().enumerate() {
            assert_eq!(s.index, i + 1);
            assert!(s.length <= max);
            assert!(s.length > TimeDelta::zero());
        }
        // Pieces are consecutive: each starts where the previous ended.
        assert_eq!(out.len(), 6);
        for pair in out.windows(2) {
            assert_eq!(pair[0].start + pair[0].length, pair[1].start);
        }
    }

    #[test]
    fn test_at_limit_sample_is_not_split() {
        let out = split_long_samples(vec![sample(0, 60, "edge")], TimeDelta::hours(60));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "edge");
    }
}

//! File slicing
//!
//! Each block becomes one or more output-file descriptors of at most
//! `max_samples_per_file` samples, with sequential `_i_of_N` filenames
//! across the whole recording. File length is the owning block's total
//! pre-trim span, so every file cut from the same block reports the
//! same covered duration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::format_hms;
use crate::pipeline::blocks::Block;

/// One sample as handed to the orchestration layer, all times as
/// canonical `HH:MM:SS` strings (hours may exceed 23).
///
/// `start_time` and `length` are absolute (since midnight of day 0);
/// `block_start_time`/`block_end_time` are the device-facing read range
/// relative to the recording start, identical for every sample of a
/// block and untouched by boundary trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSample {
    pub index: usize,
    pub start_time: String,
    pub length: String,
    pub label: String,
    pub block_start_time: String,
    pub block_end_time: String,
}

/// One read-and-save device cycle: up to `max_samples_per_file` samples
/// from a single block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub filename: String,
    pub samples: Vec<OutputSample>,
    pub file_length: String,
}

/// Slice blocks into output files and assign filenames.
pub(crate) fn slice_files(
    blocks: &[Block],
    patient_id: &str,
    max_samples_per_file: usize,
) -> Vec<OutputFile> {
    let mut files = Vec::new();

    for block in blocks {
        // The nominal covered duration comes from block timing, not from
        // re-summing the (possibly trimmed) sample times.
        let file_length = format_hms(block.timing.end_rel - block.timing.start_rel);
        let block_start = format_hms(block.timing.start_rel);
        let block_end = format_hms(block.timing.end_rel);

        for chunk in block.samples.chunks(max_samples_per_file) {
            let samples = chunk
                .iter()
                .map(|s| OutputSample {
                    index: s.index,
                    start_time: format_hms(s.start),
                    length: format_hms(s.length),
                    label: s.label.clone(),
                    block_start_time: block_start.clone(),
                    block_end_time: block_end.clone(),
                })
                .collect();
            files.push(OutputFile {
                filename: String::new(),
                samples,
                file_length: file_length.clone(),
            });
        }
    }

    let total = files.len();
    for (i, file) in files.iter_mut().enumerate() {
        file.filename = format!("{}_HRV_analysis_{}_of_{}", patient_id, i + 1, total);
    }
    debug!("sliced {} blocks into {} files", blocks.len(), total);

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::blocks::BlockTiming;
    use crate::pipeline::Sample;
    use chrono::TimeDelta;

    fn block(n_samples: usize, start_rel_h: i64, end_rel_h: i64) -> Block {
        let samples = (0..n_samples)
            .map(|i| Sample {
                index: i + 1,
                start: TimeDelta::hours(i as i64),
                length: TimeDelta::hours(1),
                label: format!("s{i}"),
            })
            .collect();
        Block {
            samples,
            timing: BlockTiming {
                start_rel: TimeDelta::hours(start_rel_h),
                end_rel: TimeDelta::hours(end_rel_h),
            },
        }
    }

    #[test]
    fn test_block_splits_by_max_samples() {
        let files = slice_files(&[block(7, 0, 7)], "ID1", 3);
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].samples.len(), 3);
        assert_eq!(files[1].samples.len(), 3);
        assert_eq!(files[2].samples.len(), 1);
    }

    #[test]
    fn test_file_length_is_block_span_for_every_slice() {
        let files = slice_files(&[block(7, 0, 48)], "ID1", 3);
        for file in &files {
            assert_eq!(file.file_length, "48:00:00");
            for s in &file.samples {
                assert_eq!(s.block_start_time, "00:00:00");
                assert_eq!(s.block_end_time, "48:00:00");
            }
        }
    }

    #[test]
    fn test_filenames_are_sequential_across_blocks() {
        let files = slice_files(&[block(4, 0, 4), block(2, 60, 62)], "ID3", 3);
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ID3_HRV_analysis_1_of_3",
                "ID3_HRV_analysis_2_of_3",
                "ID3_HRV_analysis_3_of_3",
            ]
        );
    }

    #[test]
    fn test_sample_times_are_formatted_absolute() {
        let files = slice_files(&[block(1, 0, 1)], "ID1", 15);
        let s = &files[0].samples[0];
        assert_eq!(s.start_time, "00:00:00");
        assert_eq!(s.length, "01:00:00");
    }
}

//! Block grouping and boundary trimming
//!
//! Segments are packed greedily into blocks whose total span fits one
//! continuous device read, then each block's edge samples are nudged by
//! a few seconds to dodge the device's off-by-one behavior at read
//! boundaries. Block timing is captured before any trimming and handed
//! downstream unchanged; it is what the device receives as the read
//! range, decoupled from the trimmed per-sample times.

use chrono::TimeDelta;
use tracing::{info, warn};

use crate::clock::format_hms;
use crate::config::PartitionConfig;
use crate::pipeline::{Recording, Sample};

/// A block's span relative to the recording start, computed from the
/// untrimmed first and last segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockTiming {
    pub start_rel: TimeDelta,
    pub end_rel: TimeDelta,
}

/// An ordered group of segments fitting one device read, with the
/// pre-trim timing every contained sample reports.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    pub samples: Vec<Sample>,
    pub timing: BlockTiming,
}

/// Greedy forward packing: a segment opens a new block only when adding
/// it would push the block span past `max_read_length`. Segments are
/// never reordered and each belongs to exactly one block.
pub(crate) fn group_blocks(segments: Vec<Sample>, max_read_length: TimeDelta) -> Vec<Vec<Sample>> {
    let mut blocks: Vec<Vec<Sample>> = Vec::new();
    let mut current: Vec<Sample> = Vec::new();

    for segment in segments {
        if let Some(first) = current.first() {
            let span = segment.start + segment.length - first.start;
            if span > max_read_length {
                blocks.push(std::mem::take(&mut current));
            }
        }
        current.push(segment);
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Apply the edge-sample buffers to each block and attach its pre-trim
/// timing, re-indexing samples 1..N within the block.
///
/// The first sample starts `first_sample_buffer_secs` later (length
/// shortened to match) unless that would empty it. The last sample of a
/// multi-sample block starts `last_sample_lead_secs` earlier, keeping
/// its length; if its end would then pass the recording end the length
/// is shrunk to fit, and if even that is non-positive the trim is
/// abandoned with the original values kept.
pub(crate) fn trim_blocks(
    grouped: Vec<Vec<Sample>>,
    recording: Recording,
    config: &PartitionConfig,
) -> Vec<Block> {
    grouped
        .into_iter()
        .filter(|samples| !samples.is_empty())
        .map(|samples| trim_block(samples, recording, config))
        .collect()
}

fn trim_block(samples: Vec<Sample>, recording: Recording, config: &PartitionConfig) -> Block {
    let block_start_abs = samples[0].start;
    let last = &samples[samples.len() - 1];
    let block_end_abs = last.start + last.length;
    let timing = BlockTiming {
        start_rel: block_start_abs - recording.start_offset,
        end_rel: block_end_abs - recording.start_offset,
    };

    let last_idx = samples.len() - 1;
    let buffer = TimeDelta::seconds(config.first_sample_buffer_secs);
    let lead = TimeDelta::seconds(config.last_sample_lead_secs);

    let samples = samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let mut sample = Sample {
                index: i + 1,
                ..sample
            };

            // First sample: only touched while it still sits exactly on
            // the block's original start.
            if i == 0 && sample.start == block_start_abs {
                let new_length = sample.length - buffer;
                if new_length > TimeDelta::zero() {
                    sample.start = sample.start + buffer;
                    sample.length = new_length;
                }
            }

            // Last sample of a multi-sample block starts slightly early.
            if i == last_idx && last_idx > 0 {
                let new_start = sample.start - lead;
                let new_end = new_start + sample.length;
                if new_end > recording.end() {
                    let adjusted = recording.end() - new_start;
                    if adjusted > TimeDelta::zero() {
                        sample.start = new_start;
                        sample.length = adjusted;
                        info!(
                            "shrunk last sample to fit recording end: {}",
                            format_hms(adjusted)
                        );
                    } else {
                        warn!("last sample trim would create an invalid sample, keeping original");
                    }
                } else {
                    sample.start = new_start;
                }
            }

            sample
        })
        .collect();

    Block { samples, timing }
}

//! Recording-partitioning engine for batch HRV analysis.
//!
//! Given a recording's start time and total duration, produces an
//! ordered set of non-overlapping analysis samples, grouped into blocks
//! that fit one continuous device read, sliced into output files bounded
//! by a maximum sample count. The engine is a pure function of its
//! inputs: no I/O, no shared state, safe to invoke concurrently for
//! independent recordings.
//!
//! Driving the analysis device itself (UI automation, OCR, persistence)
//! is the orchestration layer's job; this crate only consumes the start
//! time and duration it extracts and hands back in-memory descriptors.

mod clock;
mod config;
mod error;
mod intervals;
mod pipeline;

pub use config::PartitionConfig;
pub use error::{PartitionError, Result};
pub use intervals::{default_intervals, DayInterval, UNKNOWN_LABEL};
pub use pipeline::{partition, OutputFile, OutputSample, PartitionRequest};

//! Print the partitioning of two reference recordings
//!
//! Run with: cargo run --bin partition_demo
//! Set RUST_LOG=debug to see per-stage decisions.

use hrv_sampler::{partition, PartitionConfig, PartitionRequest};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_files(files: &[hrv_sampler::OutputFile]) {
    for file in files {
        println!("{} ({})", file.filename, file.file_length);
        for s in &file.samples {
            println!(
                "  {}: {} start={} length={}",
                s.index, s.label, s.start_time, s.length
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = PartitionConfig::default();

    println!("CUSTOM WINDOWS:");
    let windowed = PartitionRequest::new("08:53:47", "147:00:00", "ID3")
        .with_windows(vec![("07:00:00".into(), "15:00:00".into())]);
    let files = partition(&windowed, &config)?;
    print_files(&files);

    println!("\nDEFAULT INTERVALS:");
    let default = PartitionRequest::new("7:53:59", "147:45:37", "ID1 baseline");
    let files = partition(&default, &config)?;
    print_files(&files);

    println!("\nJSON:");
    println!("{}", serde_json::to_string_pretty(&files)?);

    Ok(())
}

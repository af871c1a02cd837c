//! CLI entry point for the hexagonal map print pipeline

use clap::Parser;
use hexmap::io::cli::{BatchProcessor, Cli};

fn main() -> hexmap::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli)?;
    processor.process()
}

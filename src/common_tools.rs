use std::io::{self, Write};

use clio::OutputPath;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

use crate::error::Error;

/// Logs go to stderr, status lines stay on stdout.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(LevelFilter::WARN);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

pub fn write_out(output: OutputPath, data: &[u8]) -> Result<(), Error> {
    let mut output = output
        .create()
        .map_err(|e| Error::Output(io::Error::other(e.to_string())))?;
    output.write_all(data)?;
    output.flush()?;
    Ok(())
}

/// `Retrieving page N ...` counter, rewritten in place on stdout.
#[derive(Debug, Default)]
pub struct Progress {
    page: usize,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the next page number and returns it.
    pub fn next_page(&mut self) -> usize {
        self.page += 1;
        print!("\rRetrieving page {} ...", self.page);
        let _ = io::stdout().flush();
        self.page
    }

    pub fn finish(&self) {
        if self.page > 0 {
            println!();
        }
    }
}

mod aggregate;
mod cli;
mod common_tools;
mod config;
mod discourse;
mod error;
mod modes;
mod pacing;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;
use discourse::DiscourseClient;
use error::Error;
use pacing::FixedDelay;
use tracing::{error, warn};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    common_tools::init_logging(args.verbose);
    cli::banner();

    match run(args).await {
        Ok(()) => {
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_config() {
                error!("{e} (run with --help for usage)");
            } else {
                error!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), Error> {
    // Configuration errors end the run here, before the output file or any connection exists.
    let config = Config::from_cli(&args)?;
    let client = DiscourseClient::new(config.api_key.as_str(), config.https_proxy.as_deref())?;
    let pacer = FixedDelay(config.sleep);

    println!("{}", config.mode);
    let path = args.output.path().to_string();

    match modes::run(&config, &client, &pacer).await {
        Ok(data) => {
            println!("Writing data to file {path} ...");
            common_tools::write_out(args.output, &data)
        }
        Err(e) => {
            if let Some(partial) = e.salvage() {
                warn!("writing partial data to file {}", path);
                if let Err(write_error) = common_tools::write_out(args.output, partial) {
                    error!("{write_error}");
                }
            }
            Err(e)
        }
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use callsift::{config, pipeline, sinks, Config, Invocation, RawArgs};

#[derive(Parser)]
#[command(name = "callsift")]
#[command(author, version, about = "Classify an outbound-call recording via speech-to-text", long_about = None)]
struct Cli {
    /// Path to the WAV recording
    #[arg(long)]
    filename: PathBuf,

    /// Phone number of the called party; non-digit characters are stripped
    #[arg(long)]
    phone: String,

    /// Recognition stage: 1 - answering machine or human, 2 - positive or negative reply
    #[arg(long)]
    stage: i64,

    /// Write the result to the database: 0 or 1
    #[arg(long, default_value_t = 0)]
    dbwrite: i64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            // The error log is the authoritative failure record; its path is
            // resolved independently so configuration failures land there too.
            let argv: Vec<String> = std::env::args().collect();
            sinks::append_error(&config::error_log_path(), &format!("{err:#}"), &argv)
                .context("Failed to record the failure in the error log")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run(cli: Cli) -> Result<()> {
    let invocation = Invocation::validate(RawArgs {
        filename: cli.filename,
        phone: cli.phone,
        stage: cli.stage,
        dbwrite: cli.dbwrite,
    })?;
    info!(
        file = ?invocation.filename,
        phone = %invocation.phone,
        stage = ?invocation.stage,
        dbwrite = invocation.dbwrite,
        "Parameters validated"
    );

    let config = Config::from_env()?;
    pipeline::run(&invocation, &config).await
}

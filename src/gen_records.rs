use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordrec::{run, GenConfig, HttpWordSource, Rng};

#[derive(Debug, Parser)]
#[command(
    name = "gen-records",
    about = "Generate a file of 32-byte word-pair records"
)]
struct Args {
    /// Number of bytes to generate, rounded down to a multiple of 32
    #[arg(value_name = "NUMBER_OF_BYTES")]
    bytes: u64,

    /// File to write the records to
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let config = GenConfig::new(args.bytes, args.output);
    let mut rng = Rng::new();
    match run(&config, &HttpWordSource::default(), &mut rng) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

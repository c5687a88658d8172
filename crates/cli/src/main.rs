use clap::Parser;
use log::{LevelFilter, debug};
use namefreq_cli::args::Args;
use namefreq_cli::commands;
use namefreq_cli::config::Config;
use namefreq_cli::error::Result;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::resolve(args)?;
    debug!("resolved config: {config:?}");

    let records = namefreq_engine::load_records(&config.data, &config.load)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&args.command, &records, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `-v` flags pick the level; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

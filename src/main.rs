// src/main.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use batch_filesize::{app, args::Args, config, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<()> {
    let config = config::resolve(args).context("invalid configuration")?;
    app::run(&config)?;
    Ok(())
}

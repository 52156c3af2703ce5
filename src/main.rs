use clap::Parser;
use pagecraft::cli::{run, Args};
use pagecraft::init_logging;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;

    let args = Args::parse();
    tracing::debug!(?args, "Parsed arguments");

    if run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

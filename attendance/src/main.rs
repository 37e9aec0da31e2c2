// src/main.rs
use anyhow::Result;
use attendance::Args;
use attendance::logging::init_tracing;
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    attendance::run(args)
}

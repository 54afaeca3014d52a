// src/bin/cli.rs
use clap::Parser;
use scrape_viewer::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())
}

// src/cli.rs
//
// Headless frontend: one submit, block for the outcome, print the composed view.
// Same lifecycle + composer as the GUI, so what prints is what the window shows.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::{bail, eyre};

use crate::{
    backend::{Backend, HttpBackend},
    config::options::ClientOptions,
    export,
    lifecycle::{ClientState, Submit},
    view,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Scrape one URL through the scraping backend and print the result")]
pub struct Args {
    /// Page to scrape
    pub url: String,

    /// Backend `/scrape` endpoint (default: $SCRAPE_VIEWER_ENDPOINT or http://localhost:8000/scrape)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Section id to expand in the printed view
    #[arg(long)]
    pub expand: Option<String>,

    /// Write scrape_result.json into this directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the full result as pretty JSON instead of the summary view
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    crate::log::init();

    let mut options = ClientOptions::from_env();
    if let Some(e) = &args.endpoint {
        options.set_endpoint(e);
    }
    logf!("CLI: endpoint={} url={}", options.endpoint, args.url);

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(options.endpoint.clone())?);
    let mut client = ClientState::new();

    match client.submit(&args.url, backend, || {}) {
        // A start failure is already `Failed`; compose reports it below.
        Submit::Started | Submit::Failed => {}
        Submit::Ignored => bail!("URL must not be empty"),
        Submit::Busy => bail!("a request is already in flight"),
    }
    client.wait();

    if let Some(id) = &args.expand {
        client.toggle(id);
    }

    let composed = view::compose(&client, &args.url);
    if let Some(err) = &composed.error {
        bail!("{err}");
    }
    let result = client.result().ok_or_else(|| eyre!("no result"))?;

    if args.json {
        println!("{}", export::to_pretty_json(result)?);
    } else {
        print!("{composed}");
    }

    if let Some(dir) = &args.out {
        options.export.set_dir(&dir.to_string_lossy());
        let path = export::write_result(result, &options.export)?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

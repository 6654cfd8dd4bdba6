use std::sync::Arc;

use crate::logging::app_config;
use clap::Parser;
use cli::Cli;
use typesense::{parse_nodes_from_str, TypesenseCollector};

mod cli;
mod logging;
mod prom;
mod server;
mod typesense;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // initialize the logger
    log4rs::init_config(app_config(cli.loglevel)).unwrap();
    log::info!("Starting the Typesense exporter!");

    let nodes = parse_nodes_from_str(&cli.typesense_nodes, "https");
    log::info!("Configured Typesense nodes: {nodes:?}");
    log::info!("Reading metrics from endpoint: {}", cli.typesense_metrics_url);
    log::info!("Reading stats from endpoint: {}", cli.typesense_stats_url);

    // The collector owns blocking HTTP clients, so it is built (and will be
    // dropped) outside the async runtime.
    let collector = Arc::new(TypesenseCollector::new(
        &cli.typesense_api_key,
        &cli.typesense_metrics_url,
        &cli.typesense_stats_url,
        &cli.typesense_debug_url,
        nodes,
        cli.verify,
    )?);

    log::info!("Serving Prometheus metrics on port {}", cli.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(collector, cli.port))?;
    Ok(())
}

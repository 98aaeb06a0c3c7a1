mod configuration;

use anyhow::{Context, Result};
use clap::Parser;
use configuration::Configuration;
use gtfs_rdf::GtfsToRdf;
use log::info;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let configuration = Configuration::parse();
    let time = Instant::now();

    let config = configuration.config()?;
    let mut converter = GtfsToRdf::new(config).with_reader(configuration.reader());
    converter
        .convert(&configuration.feed, &configuration.output)
        .with_context(|| {
            format!(
                "converting {} to {}",
                configuration.feed.display(),
                configuration.output.display()
            )
        })?;

    info!(
        "{} statements written to {} in {:.2}s",
        converter.graph().len(),
        configuration.output.display(),
        time.elapsed().as_secs_f32()
    );
    Ok(())
}

mod compose;
mod config;
mod output;
mod template;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, value_parser};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{CONTROL_TEMPLATE, NODE_TEMPLATE, OUTPUT_FILE, Settings};

fn cli() -> Command {
    Command::new("compose-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a multi-node docker compose file from control and node templates")
        .arg(
            Arg::new("nodes")
                .value_name("NODES")
                .help("Number of node containers to generate")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory holding the templates and receiving the output")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("control")
                .long("control")
                .value_name("FILE")
                .help("Control (base) template")
                .default_value(CONTROL_TEMPLATE),
        )
        .arg(
            Arg::new("node")
                .long("node")
                .value_name("FILE")
                .help("Per-node template; its first line is skipped")
                .default_value(NODE_TEMPLATE),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file, overwritten on every run")
                .default_value(OUTPUT_FILE),
        )
}

fn file_arg<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("Missing --{}", id))
}

fn settings_from(matches: &ArgMatches) -> Result<Settings> {
    let node_count = *matches.get_one::<i64>("nodes").context("Missing node count")?;
    let dir = matches.get_one::<PathBuf>("dir").context("Missing directory")?;

    Ok(Settings::new(
        node_count,
        dir,
        file_arg(matches, "control")?,
        file_arg(matches, "node")?,
        file_arg(matches, "output")?,
    ))
}

#[derive(Debug)]
struct Summary {
    node_count: i64,
    output_path: PathBuf,
    bytes: usize,
}

/// Loads templates, renders the compose document and writes it out.
fn run(settings: &Settings) -> Result<Summary> {
    if settings.node_count < 0 {
        warn!(nodes = settings.node_count, "Negative node count, no node blocks will be generated");
    }

    let templates = template::load(settings)?;
    let document = compose::render(&templates, settings.node_count);
    output::write(&settings.output_path, &document)?;

    Ok(Summary {
        node_count: settings.node_count.max(0),
        output_path: settings.output_path.clone(),
        bytes: document.len(),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let settings = settings_from(&matches)?;

    let summary = run(&settings).context("Failed to generate compose file")?;
    info!(
        nodes = summary.node_count,
        bytes = summary.bytes,
        "Wrote {}",
        summary.output_path.display()
    );

    Ok(())
}

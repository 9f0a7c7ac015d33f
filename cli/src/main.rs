use anyhow::{Context, Result};
use chef_config_core::{generate_from_str, to_pretty_json, GenerateOptions};
use clap::Parser;
use std::io::{self, BufWriter, Read, Write};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "generate-chef-config")]
#[command(about = "Turn a JSON object of worker settings into chef config for travis_go_worker")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    tracing::debug!(bytes = input.len(), "read worker settings");

    let config = generate_from_str(&input, &GenerateOptions::default())
        .map_err(|e| anyhow::Error::from(e).context("Failed to generate chef config"))?;

    // Render fully before touching stdout so a failure never leaves partial output
    let rendered = to_pretty_json(&config).context("Failed to render JSON")?;

    let mut writer = BufWriter::new(io::stdout().lock());
    writeln!(writer, "{rendered}").context("Failed to write JSON")?;
    writer.flush().context("Failed to flush stdout")?;

    Ok(())
}

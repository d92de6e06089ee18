use anyhow::Context;
use clap::Parser;
use postmap::{MapLimits, MapRenderer, PostMapEnvelope, RenderPlan};
use std::{
    io::{self, Read},
    path::PathBuf,
};

/// Validate a map request envelope and print the resulting configuration
#[derive(Debug, Parser)]
#[command(name = "postmap-cli")]
#[command(about = "Translate postmap request envelopes into map configurations", long_about = None)]
struct Cli {
    /// Largest accepted output size, as WIDTHxHEIGHT
    #[arg(long, default_value_t = MapLimits::default())]
    max_size: MapLimits,

    /// Print the renderer calls the configuration would make instead of the configuration
    #[arg(long)]
    plan: bool,

    /// Envelope JSON file, reads stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = read_input(cli.file.as_ref())?;

    let envelope = PostMapEnvelope::from_json(&input).context("failed to parse envelope")?;
    let config = envelope.to_map_config(&cli.max_size)?;

    let output = if cli.plan {
        let mut plan = RenderPlan::new();
        config.apply_to(&mut plan);
        plan.render(config.width, config.height);
        serde_json::to_string_pretty(&plan.into_steps())?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    println!("{}", output);
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            log::debug!("reading envelope from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sdk_advisor::advisor::index::SdkIndex;
use sdk_advisor::{AdvisorConfig, RawObservation, build_advisory};

#[derive(Parser)]
#[command(name = "sdk-advisor")]
#[command(version, about = "Build an SDK update advisory from observation and index fixtures")]
struct Cli {
    /// JSON array of observation rows as returned by the event query
    #[arg(long)]
    observations: PathBuf,

    /// JSON table of known SDK versions and deprecations
    #[arg(long)]
    index: PathBuf,

    /// Project ids to report on; defaults to the ids present in the
    /// observations
    #[arg(long, value_delimiter = ',')]
    projects: Option<Vec<u64>>,

    /// Pipeline configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let observations: Vec<RawObservation> = serde_json::from_str(
        &fs::read_to_string(&cli.observations)
            .with_context(|| format!("reading {}", cli.observations.display()))?,
    )
    .context("parsing observations")?;

    let index: SdkIndex = serde_json::from_str(
        &fs::read_to_string(&cli.index)
            .with_context(|| format!("reading {}", cli.index.display()))?,
    )
    .context("parsing index")?;

    let config = match &cli.config {
        Some(path) => serde_json::from_str(
            &fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        )
        .context("parsing config")?,
        None => AdvisorConfig::default(),
    };

    let projects = cli.projects.unwrap_or_else(|| {
        let mut ids: Vec<u64> = observations.iter().filter_map(|o| o.project_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    });

    let advisory = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(build_advisory(&projects, observations, &index, &config));

    println!("{}", serde_json::to_string_pretty(&advisory)?);
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use dedupe_lib::clustering::materialize::materialize_group;
use dedupe_lib::clustering::record_clustering::cluster_records_with_progress;
use dedupe_lib::config::MatchConfig;
use dedupe_lib::io::output::{write_report, DedupeReport, OutputFormat};
use dedupe_lib::io::records::load_records;
use dedupe_lib::utils::env::load_env;
use dedupe_lib::utils::get_memory_usage;
use dedupe_lib::utils::progress_bars::logging::ClusteringLogger;
use dedupe_lib::utils::progress_bars::progress_config::ProgressConfig;
use log::{info, warn};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about = "Merge duplicate geo-located place records", long_about = None)]
struct Args {
    /// Input file: JSON array of records or a GeoJSON FeatureCollection
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// GPS match distance in meters
    #[arg(long)]
    gps_threshold: Option<f64>,

    /// Name similarity threshold, 0-1
    #[arg(long)]
    name_threshold: Option<f64>,

    /// GPS distance in meters required for generic names
    #[arg(long)]
    generic_gps_threshold: Option<f64>,

    /// Never match on name similarity alone
    #[arg(long)]
    require_gps: bool,

    /// Disable the word-overlap threshold boost
    #[arg(long)]
    no_word_overlap_boost: bool,

    #[arg(long)]
    max_cluster_size: Option<usize>,

    /// Maximum cluster diameter in meters
    #[arg(long)]
    max_cluster_diameter: Option<f64>,

    /// Minimum match confidence, 0-100
    #[arg(long)]
    min_confidence: Option<f64>,
}

impl Args {
    /// Command-line flags win over environment values.
    fn apply_overrides(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(v) = self.gps_threshold {
            config.gps_threshold_meters = v;
        }
        if let Some(v) = self.name_threshold {
            config.name_threshold = v;
        }
        if let Some(v) = self.generic_gps_threshold {
            config.generic_gps_threshold_meters = v;
        }
        if self.require_gps {
            config.require_gps_match = true;
        }
        if self.no_word_overlap_boost {
            config.word_overlap_boost = false;
        }
        if let Some(v) = self.max_cluster_size {
            config.max_cluster_size = v;
        }
        if let Some(v) = self.max_cluster_diameter {
            config.max_cluster_diameter_meters = v;
        }
        if let Some(v) = self.min_confidence {
            config.min_confidence = v;
        }
        config
    }
}

fn configure_thread_pool() {
    let workers = std::env::var("DEDUPE_WORKERS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(num_cpus::get);
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build_global() {
        Ok(()) => info!("Using {} worker threads for pair evaluation", workers),
        Err(e) => warn!("Could not configure worker pool: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    load_env();
    let args = Args::parse();

    let config = args.apply_overrides(MatchConfig::from_env());
    config.validate().context("Invalid match configuration")?;
    config.log_config();

    let progress_config = ProgressConfig::from_env();
    configure_thread_pool();

    let run_id = Uuid::new_v4().to_string();
    info!("Starting dedupe run {}", run_id);

    let records = load_records(&args.input).await?;
    let logger = ClusteringLogger::new(run_id.clone());
    let task_logger = logger.clone();
    let progress = progress_config.create_bar(0, "Evaluating pairs...");

    let (merged, stats) = tokio::task::spawn_blocking(move || -> Result<_> {
        let (groups, stats) =
            cluster_records_with_progress(&records, &config, &task_logger, progress.as_ref())?;
        let merged: Vec<_> = groups
            .iter()
            .map(|group| materialize_group(group, &records))
            .collect();
        Ok((merged, stats))
    })
    .await
    .context("Clustering task panicked")??;

    if progress_config.should_show_memory() {
        logger.log_memory(get_memory_usage());
    }

    let report = DedupeReport::new(run_id, config, stats, merged);
    write_report(&args.output, &report, args.format).await?;

    info!(
        "Dedupe finished in {:.2?}: {} records → {} merged records",
        logger.get_elapsed(),
        report.stats.records,
        report.records.len()
    );
    Ok(())
}

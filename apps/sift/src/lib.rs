use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sift_service::{Providers, SiftService};

#[derive(Debug, Parser)]
#[command(
	version = sift_cli::VERSION,
	rename_all = "kebab",
	styles = sift_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Root directory holding one subdirectory per collection.
	#[arg(long, short = 'i', value_name = "DIR")]
	pub input: PathBuf,
	/// Directory receiving one report file per collection.
	#[arg(long, short = 'o', value_name = "DIR")]
	pub output: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = sift_config::load(&args.config)?;
	init_tracing(&config);

	let providers = Providers::from_config(&config)?;
	let service = SiftService::new(config, providers);
	let summary = service.run_batch(&args.input, &args.output).await?;

	tracing::info!(
		processed = summary.processed,
		skipped = summary.skipped,
		failed = summary.failed,
		"Batch finished."
	);

	Ok(())
}

fn init_tracing(config: &sift_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}

use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::{Error, Result, SiftService, rank, report, report::Report};
use sift_domain::{build_query, extract_sections};

/// Per-collection persona/job config file name.
pub const COLLECTION_CONFIG_FILE: &str = "challenge1b_input.json";
/// Per-collection document directory name.
pub const PDF_DIR: &str = "PDFs";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
	/// Collections whose report was written.
	pub processed: usize,
	/// Collections skipped for missing or unreadable input.
	pub skipped: usize,
	/// Collections aborted mid-pipeline, e.g. by an embedding failure.
	pub failed: usize,
}

impl SiftService {
	/// Processes every collection under `input_root`, one at a time, writing
	/// `<output_root>/<collection_name>.json` per collection. A collection
	/// with missing input is skipped with a diagnostic; a collection whose
	/// ranking fails is aborted without a report. Neither stops the batch.
	pub async fn run_batch(&self, input_root: &Path, output_root: &Path) -> Result<BatchSummary> {
		let collections = discover_collections(input_root)?;

		fs::create_dir_all(output_root)
			.map_err(|err| Error::Io { path: output_root.to_path_buf(), source: err })?;

		let mut summary = BatchSummary::default();

		for dir in collections {
			let name = collection_name(&dir);

			match self.process_collection(&dir).await {
				Ok(report) => {
					let path = output_root.join(format!("{name}.json"));

					write_report(&path, &report)?;
					tracing::info!(
						collection = %name,
						sections = report.extracted_sections.len(),
						"Report written."
					);

					summary.processed += 1;
				},
				Err(err) if err.is_skip() => {
					tracing::warn!(collection = %name, error = %err, "Skipping collection.");

					summary.skipped += 1;
				},
				Err(err) => {
					tracing::error!(collection = %name, error = %err, "Collection failed.");

					summary.failed += 1;
				},
			}
		}

		Ok(summary)
	}

	/// Runs the core pipeline for one collection: load + normalize config,
	/// extract candidates per document in page/line order, rank them all
	/// against the persona/job query, assemble the report.
	pub async fn process_collection(&self, dir: &Path) -> Result<Report> {
		let config_path = dir.join(COLLECTION_CONFIG_FILE);

		if !config_path.is_file() {
			return Err(Error::MissingInput { path: config_path });
		}

		let pdf_dir = dir.join(PDF_DIR);

		if !pdf_dir.is_dir() {
			return Err(Error::MissingInput { path: pdf_dir });
		}

		let (persona, job) = sift_config::load_collection(&config_path)?.resolve();
		let documents = list_pdfs(&pdf_dir)?;
		let mut candidates = Vec::new();

		for document in &documents {
			match self.providers.layout.read_layout(&pdf_dir.join(document)) {
				Ok(pages) => candidates.extend(extract_sections(document, &pages)),
				// Exclude-and-continue: a broken document drops out, its
				// siblings still rank.
				Err(err) => {
					tracing::error!(document = %document, error = %err, "Skipping unreadable document.");
				},
			}
		}

		let query = build_query(&persona, &job);
		let ranked = rank::rank_sections(
			self.providers.embedding.as_ref(),
			&self.cfg.providers.embedding,
			&query,
			candidates,
		)
		.await?;

		report::assemble(documents, &persona, &job, &ranked, self.cfg.report.top_k as usize)
	}
}

fn collection_name(dir: &Path) -> String {
	dir.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

fn discover_collections(input_root: &Path) -> Result<Vec<PathBuf>> {
	let entries = fs::read_dir(input_root)
		.map_err(|err| Error::Io { path: input_root.to_path_buf(), source: err })?;
	let mut collections = Vec::new();

	for entry in entries {
		let entry =
			entry.map_err(|err| Error::Io { path: input_root.to_path_buf(), source: err })?;
		let path = entry.path();

		if path.is_dir() {
			collections.push(path);
		}
	}

	// Deterministic batch order.
	collections.sort();

	Ok(collections)
}

fn list_pdfs(pdf_dir: &Path) -> Result<Vec<String>> {
	let entries = fs::read_dir(pdf_dir)
		.map_err(|err| Error::Io { path: pdf_dir.to_path_buf(), source: err })?;
	let mut documents = Vec::new();

	for entry in entries {
		let entry = entry.map_err(|err| Error::Io { path: pdf_dir.to_path_buf(), source: err })?;
		let path = entry.path();
		let is_pdf = path.is_file()
			&& path
				.extension()
				.is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"));

		if is_pdf && let Some(name) = path.file_name() {
			documents.push(name.to_string_lossy().into_owned());
		}
	}

	// Deterministic document order; extraction-order tie-breaks depend on it.
	documents.sort();

	Ok(documents)
}

fn write_report(path: &Path, report: &Report) -> Result<()> {
	let json = serde_json::to_string_pretty(report)?;

	fs::write(path, json).map_err(|err| Error::Io { path: path.to_path_buf(), source: err })
}

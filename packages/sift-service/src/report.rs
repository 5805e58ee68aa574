use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, Result, rank::ScoredCandidate};

/// Document attribution fallback. Extraction always stamps a document name,
/// so this only surfaces if a candidate reaches assembly without one.
pub const FALLBACK_DOCUMENT: &str = "unknown.pdf";

#[derive(Debug, Serialize)]
pub struct Report {
	pub metadata: Metadata,
	pub extracted_sections: Vec<ExtractedSection>,
	pub subsection_analysis: Vec<SubsectionAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
	/// Every document considered for the collection, not just those that
	/// reached the top-K.
	pub input_documents: Vec<String>,
	pub persona: String,
	pub job_to_be_done: String,
	pub processing_timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractedSection {
	pub document: String,
	pub section_title: String,
	pub importance_rank: u32,
	pub page_number: u32,
}

#[derive(Debug, Serialize)]
pub struct SubsectionAnalysis {
	pub document: String,
	pub refined_text: String,
	pub page_number: u32,
}

/// Shapes the first `top_k` ranked candidates into the two index-aligned
/// output views plus metadata. Fewer candidates than `top_k` is fine; the
/// arrays are just shorter. The timestamp is captured here, at assembly.
pub fn assemble(
	documents: Vec<String>,
	persona: &str,
	job: &str,
	ranked: &[ScoredCandidate],
	top_k: usize,
) -> Result<Report> {
	let processing_timestamp = OffsetDateTime::now_utc()
		.format(&Rfc3339)
		.map_err(|err| Error::Timestamp { source: err })?;
	let kept = &ranked[..ranked.len().min(top_k)];
	let mut extracted_sections = Vec::with_capacity(kept.len());
	let mut subsection_analysis = Vec::with_capacity(kept.len());

	for (idx, entry) in kept.iter().enumerate() {
		let candidate = &entry.candidate;
		let document = if candidate.document.is_empty() {
			FALLBACK_DOCUMENT.to_string()
		} else {
			candidate.document.clone()
		};

		extracted_sections.push(ExtractedSection {
			document: document.clone(),
			section_title: candidate.text.clone(),
			importance_rank: idx as u32 + 1,
			page_number: candidate.page,
		});
		// Verbatim copy: summarization is deliberately out of scope.
		subsection_analysis.push(SubsectionAnalysis {
			document,
			refined_text: candidate.text.clone(),
			page_number: candidate.page,
		});
	}

	Ok(Report {
		metadata: Metadata {
			input_documents: documents,
			persona: persona.to_string(),
			job_to_be_done: job.to_string(),
			processing_timestamp,
		},
		extracted_sections,
		subsection_analysis,
	})
}

use serde::Serialize;

use crate::layout::PageLayout;

/// Minimum leading font size, in points, for a line to count as a section.
/// Font size stands in for "heading or emphasized content" without a full
/// structure detector.
pub const MIN_SECTION_FONT_SIZE: f32 = 12.0;
/// Minimum trimmed character count. Filters near-empty lines such as
/// bullets and page numbers.
pub const MIN_SECTION_CHARS: usize = 6;

/// One extracted line of PDF text meeting the font-size/length heuristic.
/// Immutable once created; identical text across pages or documents is not
/// deduplicated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionCandidate {
	pub document: String,
	/// 1-based page number within the source document.
	pub page: u32,
	pub text: String,
}

/// Walks pages in document order and emits one candidate per qualifying
/// line: leading font size at least [`MIN_SECTION_FONT_SIZE`] and trimmed
/// text at least [`MIN_SECTION_CHARS`] characters. The emitted text is
/// trimmed. A line whose first span has no readable size never qualifies.
pub fn extract_sections(document: &str, pages: &[PageLayout]) -> Vec<SectionCandidate> {
	let mut candidates = Vec::new();

	for page in pages {
		for line in &page.lines {
			let Some(font_size) = line.leading_font_size() else {
				continue;
			};

			if font_size < MIN_SECTION_FONT_SIZE {
				continue;
			}

			let text = line.text();
			let trimmed = text.trim();

			if trimmed.chars().count() < MIN_SECTION_CHARS {
				continue;
			}

			candidates.push(SectionCandidate {
				document: document.to_string(),
				page: page.number,
				text: trimmed.to_string(),
			});
		}
	}

	candidates
}

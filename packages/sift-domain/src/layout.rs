/// Text layout of a single page, as produced by the PDF collaborator:
/// lines in reading order, spans within a line left to right. Image and
/// vector content never reaches this representation.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
	/// 1-based page number.
	pub number: u32,
	pub lines: Vec<TextLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
	pub spans: Vec<TextSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
	pub text: String,
	/// Font size in points. `None` when the source span carries no readable
	/// size; such lines never qualify as sections.
	pub font_size: Option<f32>,
}

impl TextLine {
	/// Span texts joined with single spaces, mirroring how the source layout
	/// separates runs within one visual line.
	pub fn text(&self) -> String {
		self.spans.iter().map(|span| span.text.as_str()).collect::<Vec<_>>().join(" ")
	}

	/// Font size of the line's first span, the cheap proxy used by the
	/// section heuristic.
	pub fn leading_font_size(&self) -> Option<f32> {
		self.spans.first().and_then(|span| span.font_size)
	}
}

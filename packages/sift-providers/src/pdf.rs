use std::path::Path;

use color_eyre::{Result, eyre};
use pdfium_render::prelude::*;

use sift_domain::{PageLayout, TextLine, TextSpan};

/// Binds the pdfium system library once at startup. The binding is reused
/// read-only for every document in the batch.
pub fn bind() -> Result<Pdfium> {
	let bindings = Pdfium::bind_to_system_library()
		.map_err(|err| eyre::eyre!("Failed to bind pdfium library: {err:?}."))?;

	Ok(Pdfium::new(bindings))
}

/// Reads the text layout of a document: pages in order, one line per text
/// run with the run's font size. Image and vector objects are ignored. An
/// unopenable or unparsable document is an error for the caller to handle;
/// it never degrades into an empty layout.
pub fn read_layout(pdfium: &Pdfium, path: &Path) -> Result<Vec<PageLayout>> {
	let document = pdfium
		.load_pdf_from_file(path, None)
		.map_err(|err| eyre::eyre!("Failed to open PDF at {path:?}: {err:?}."))?;
	let mut pages = Vec::with_capacity(document.pages().len() as usize);

	for (index, page) in document.pages().iter().enumerate() {
		let mut lines = Vec::new();

		for object in page.objects().iter() {
			let Some(text_object) = object.as_text_object() else {
				continue;
			};
			let text = text_object.text();

			if text.trim().is_empty() {
				continue;
			}

			let size = text_object.unscaled_font_size().value;
			let font_size = if size > 0.0 { Some(size) } else { None };

			lines.push(TextLine { spans: vec![TextSpan { text, font_size }] });
		}

		pages.push(PageLayout { number: index as u32 + 1, lines });
	}

	Ok(pages)
}

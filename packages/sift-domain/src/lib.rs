pub mod layout;
pub mod query;
pub mod section;

pub use layout::{PageLayout, TextLine, TextSpan};
pub use query::build_query;
pub use section::{MIN_SECTION_CHARS, MIN_SECTION_FONT_SIZE, SectionCandidate, extract_sections};

pub mod collection;
pub mod rank;
pub mod report;

mod error;

use std::{future::Future, path::Path, pin::Pin, sync::Arc};

use pdfium_render::prelude::Pdfium;

pub use collection::{BatchSummary, COLLECTION_CONFIG_FILE, PDF_DIR};
pub use error::{Error, Result};
pub use rank::{ScoredCandidate, cosine_similarity, rank_sections};
pub use report::{
	ExtractedSection, FALLBACK_DOCUMENT, Metadata, Report, SubsectionAnalysis, assemble,
};

use sift_config::{Config, EmbeddingProviderConfig};
use sift_domain::PageLayout;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>>;
}

pub trait LayoutProvider
where
	Self: Send + Sync,
{
	fn read_layout(&self, path: &Path) -> color_eyre::Result<Vec<PageLayout>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub layout: Arc<dyn LayoutProvider>,
}

impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>, layout: Arc<dyn LayoutProvider>) -> Self {
		Self { embedding, layout }
	}

	/// Wires the real collaborators: one HTTP client and one pdfium binding,
	/// both constructed here and reused for the whole batch.
	pub fn from_config(cfg: &Config) -> color_eyre::Result<Self> {
		let defaults = Arc::new(DefaultProviders {
			client: sift_providers::client(&cfg.providers.embedding)?,
			pdfium: sift_providers::pdf::bind()?,
		});

		Ok(Self { embedding: defaults.clone(), layout: defaults })
	}
}

struct DefaultProviders {
	client: reqwest::Client,
	pdfium: Pdfium,
}

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>> {
		Box::pin(sift_providers::embedding::embed(&self.client, cfg, texts))
	}
}

impl LayoutProvider for DefaultProviders {
	fn read_layout(&self, path: &Path) -> color_eyre::Result<Vec<PageLayout>> {
		sift_providers::pdf::read_layout(&self.pdfium, path)
	}
}

pub struct SiftService {
	pub cfg: Config,
	pub providers: Providers,
}

impl SiftService {
	pub fn new(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}

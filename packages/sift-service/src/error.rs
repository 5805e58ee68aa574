pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Collection(#[from] sift_config::Error),
	#[error("Missing collection input at {path:?}.")]
	MissingInput { path: std::path::PathBuf },
	#[error("Embedding provider failed: {message}")]
	Provider { message: String },
	#[error("Failed to access {path:?}.")]
	Io { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to serialize report.")]
	Serialize {
		#[from]
		source: serde_json::Error,
	},
	#[error("Failed to format processing timestamp.")]
	Timestamp { source: time::error::Format },
}

impl Error {
	/// Collection-level input problems are recovered at the batch boundary
	/// with a skip diagnostic; everything else fails the collection.
	pub fn is_skip(&self) -> bool {
		matches!(self, Self::Collection(_) | Self::MissingInput { .. })
	}
}

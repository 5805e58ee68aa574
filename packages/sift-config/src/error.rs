pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read config file at {path:?}.")]
	ReadConfig { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse config file at {path:?}.")]
	ParseConfig { path: std::path::PathBuf, source: toml::de::Error },
	#[error("Failed to read collection config at {path:?}.")]
	ReadCollection { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse collection config at {path:?}.")]
	ParseCollection { path: std::path::PathBuf, source: serde_json::Error },
	#[error("{message}")]
	Validation { message: String },
}

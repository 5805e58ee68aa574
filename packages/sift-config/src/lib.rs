mod collection;
mod error;
mod types;

pub use collection::{
	CollectionConfig, DEFAULT_JOB, DEFAULT_PERSONA, JobSpec, PersonaSpec, load_collection,
};
pub use error::{Error, Result};
pub use types::{Config, EmbeddingProviderConfig, Providers, Report, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (label, value) in [
		("api_base", &cfg.providers.embedding.api_base),
		("api_key", &cfg.providers.embedding.api_key),
		("path", &cfg.providers.embedding.path),
		("model", &cfg.providers.embedding.model),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.embedding.{label} must be non-empty."),
			});
		}
	}

	if cfg.report.top_k == 0 {
		return Err(Error::Validation {
			message: "report.top_k must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Error, Result};

/// Persona used when a collection config omits one or carries an empty shape.
pub const DEFAULT_PERSONA: &str = "Generic User";
/// Job used when a collection config omits one or carries an empty shape.
pub const DEFAULT_JOB: &str = "Understand document";

/// Per-collection input config. Persona and job tolerate both the plain
/// string shape and the structured object shape observed in collection
/// inputs; anything else is a parse error rather than a silent default.
#[derive(Debug, Deserialize)]
pub struct CollectionConfig {
	#[serde(default)]
	pub persona: Option<PersonaSpec>,
	#[serde(default)]
	pub job_to_be_done: Option<JobSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PersonaSpec {
	Plain(String),
	Structured { role: Option<String> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobSpec {
	Plain(String),
	Structured { task: Option<String> },
}

impl CollectionConfig {
	/// Resolves both duck-typed shapes into canonical strings, once, at load
	/// time. Everything downstream works with plain strings.
	pub fn resolve(self) -> (String, String) {
		let persona = match self.persona {
			Some(PersonaSpec::Plain(role)) => role,
			Some(PersonaSpec::Structured { role: Some(role) }) => role,
			Some(PersonaSpec::Structured { role: None }) | None => DEFAULT_PERSONA.to_string(),
		};
		let job = match self.job_to_be_done {
			Some(JobSpec::Plain(task)) => task,
			Some(JobSpec::Structured { task: Some(task) }) => task,
			Some(JobSpec::Structured { task: None }) | None => DEFAULT_JOB.to_string(),
		};

		(persona, job)
	}
}

pub fn load_collection(path: &Path) -> Result<CollectionConfig> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadCollection { path: path.to_path_buf(), source: err })?;

	serde_json::from_str(&raw)
		.map_err(|err| Error::ParseCollection { path: path.to_path_buf(), source: err })
}

/// Formats persona and job into the relevance query. The exact wording is
/// part of what gets embedded, so it is a contract: changing the separator
/// changes every relevance score.
pub fn build_query(persona: &str, job: &str) -> String {
	format!("{persona} needs to: {job}")
}

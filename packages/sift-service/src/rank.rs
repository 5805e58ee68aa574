use sift_config::EmbeddingProviderConfig;
use sift_domain::SectionCandidate;

use crate::{EmbeddingProvider, Error, Result};

/// Transport batching only: scores and ordering are identical to embedding
/// one text at a time.
const EMBED_BATCH_SIZE: usize = 64;

/// A candidate paired with its relevance score. Transient: exists only
/// between ranking and report assembly.
#[derive(Clone, Debug)]
pub struct ScoredCandidate {
	pub score: f32,
	pub candidate: SectionCandidate,
}

/// Embeds the query once and every candidate text independently, scores by
/// cosine similarity, and returns all candidates sorted by descending score.
/// The sort is stable, so equal scores keep extraction order and repeated
/// runs on identical input produce identical orderings.
pub async fn rank_sections(
	provider: &dyn EmbeddingProvider,
	cfg: &EmbeddingProviderConfig,
	query: &str,
	candidates: Vec<SectionCandidate>,
) -> Result<Vec<ScoredCandidate>> {
	if candidates.is_empty() {
		return Ok(Vec::new());
	}

	let query_vector = embed_all(provider, cfg, &[query.to_string()])
		.await?
		.pop()
		.ok_or_else(|| Error::Provider { message: "Query embedding is missing.".to_string() })?;
	let texts: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
	let vectors = embed_all(provider, cfg, &texts).await?;
	let mut scored: Vec<ScoredCandidate> = candidates
		.into_iter()
		.zip(vectors)
		.map(|(candidate, vector)| ScoredCandidate {
			score: cosine_similarity(&query_vector, &vector),
			candidate,
		})
		.collect();

	if let Some(bad) = scored.iter().find(|entry| !entry.score.is_finite()) {
		return Err(Error::Provider {
			message: format!(
				"Non-finite relevance score for section on page {} of {}.",
				bad.candidate.page, bad.candidate.document
			),
		});
	}

	scored.sort_by(|a, b| b.score.total_cmp(&a.score));

	Ok(scored)
}

async fn embed_all(
	provider: &dyn EmbeddingProvider,
	cfg: &EmbeddingProviderConfig,
	texts: &[String],
) -> Result<Vec<Vec<f32>>> {
	let mut out = Vec::with_capacity(texts.len());

	for batch in texts.chunks(EMBED_BATCH_SIZE) {
		let vectors = provider
			.embed(cfg, batch)
			.await
			.map_err(|err| Error::Provider { message: err.to_string() })?;

		if vectors.len() != batch.len() {
			return Err(Error::Provider {
				message: format!(
					"Embedding batch returned {} vectors for {} texts.",
					vectors.len(),
					batch.len()
				),
			});
		}

		out.extend(vectors);
	}

	Ok(out)
}

/// Normalized dot product of two vectors. 0.0 when either vector has zero
/// magnitude, so degenerate embeddings rank last instead of poisoning the
/// sort.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
	let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}

	dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identical_vectors_score_one() {
		let v = vec![0.3, 0.4, 0.5];

		assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn orthogonal_vectors_score_zero() {
		assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
	}

	#[test]
	fn opposite_vectors_score_negative_one() {
		assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
	}

	#[test]
	fn zero_vector_scores_zero() {
		assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
	}

	#[test]
	fn magnitude_does_not_matter() {
		let a = [1.0, 2.0, 3.0];
		let b = [10.0, 20.0, 30.0];

		assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
	}
}

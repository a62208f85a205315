use crate::job::AiJob;
use crate::result::{AiError, Recommendation};
use crate::snapshot::{CatalogBook, CatalogSnapshot};

/// Fixed message shown when recommendation fails for any reason. Assistant
/// failures stop here; they never reach the circulation store.
pub const FALLBACK_MESSAGE: &str =
    "The library assistant is offline right now; please try again later.";

/// Deterministic in-process recommender.
///
/// Model:
/// - Split the query into lowercase terms.
/// - Score each snapshot entry by term hits across title, category, author
///   and description, with a small bonus for copies on the shelf.
/// - Reply with the top `max_results` titles; if nothing scores, offer the
///   first available titles as the closest alternative.
///
/// Output is best-effort display text, same contract as a remote model.
#[derive(Debug, Clone)]
pub struct RecommendationJob {
    query: String,
    input: CatalogSnapshot,
    /// Upper bound on recommended titles per reply.
    max_results: usize,
}

impl RecommendationJob {
    pub fn new(query: impl Into<String>, input: CatalogSnapshot) -> Self {
        Self {
            query: query.into(),
            input,
            max_results: 3,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl AiJob for RecommendationJob {
    type Input = CatalogSnapshot;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<Recommendation, AiError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(AiError::InvalidInput("query cannot be empty".to_string()));
        }
        if self.max_results == 0 {
            return Err(AiError::InvalidInput(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.input.is_empty() {
            return Err(AiError::InferenceFailed(
                "catalog snapshot is empty".to_string(),
            ));
        }

        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        let mut scored: Vec<(i32, &CatalogBook)> = self
            .input
            .books
            .iter()
            .map(|book| (score_book(book, &terms), book))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.title.cmp(&b.1.title)));

        let (confidence, picks): (f64, Vec<&CatalogBook>) = if scored.is_empty() {
            // No term matched anything: offer the closest thing we have,
            // the first few copies still on the shelf.
            let picks: Vec<&CatalogBook> = self
                .input
                .books
                .iter()
                .filter(|b| b.is_available())
                .take(self.max_results)
                .collect();
            (0.3, picks)
        } else {
            (
                0.8,
                scored
                    .into_iter()
                    .take(self.max_results)
                    .map(|(_, book)| book)
                    .collect(),
            )
        };

        if picks.is_empty() {
            return Err(AiError::InferenceFailed(
                "no titles to recommend".to_string(),
            ));
        }

        let matched_titles: Vec<String> = picks.iter().map(|b| b.title.clone()).collect();
        let text = render_reply(query, &picks, confidence);

        Ok(Recommendation::new(text, confidence).with_matched_titles(matched_titles))
    }
}

/// Run a recommendation and degrade any failure to the fixed fallback
/// message.
pub fn recommend_or_fallback(job: &RecommendationJob) -> String {
    match job.run() {
        Ok(recommendation) => recommendation.text,
        Err(err) => {
            tracing::warn!(error = %err, "recommendation failed; serving fallback message");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

fn score_book(book: &CatalogBook, terms: &[String]) -> i32 {
    let title = book.title.to_lowercase();
    let author = book.author.to_lowercase();
    let category = book.category.to_lowercase();
    let description = book
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let mut score = 0;
    for term in terms {
        if title.contains(term) {
            score += 3;
        }
        if category.contains(term) {
            score += 2;
        }
        if author.contains(term) {
            score += 2;
        }
        if description.contains(term) {
            score += 1;
        }
    }
    if score > 0 && book.is_available() {
        score += 1;
    }
    score
}

fn render_reply(query: &str, picks: &[&CatalogBook], confidence: f64) -> String {
    let mut lines = Vec::with_capacity(picks.len() + 1);
    if confidence >= 0.5 {
        lines.push(format!("For \"{query}\", these holdings stand out:"));
    } else {
        lines.push(format!(
            "Nothing in the catalog matches \"{query}\" directly; the closest titles on the shelf:"
        ));
    }
    for book in picks {
        let availability = if book.is_available() {
            "on the shelf"
        } else {
            "currently out"
        };
        lines.push(format!(
            "- {} by {} ({}, {availability})",
            book.title, book.author, book.category
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, author: &str, category: &str, status: &str) -> CatalogBook {
        CatalogBook {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            description: None,
            status: status.to_string(),
        }
    }

    fn sample_snapshot() -> CatalogSnapshot {
        CatalogSnapshot::from_books([
            entry(
                "The Three-Body Problem",
                "Liu Cixin",
                "Science Fiction",
                "available",
            ),
            entry("Sapiens", "Yuval Noah Harari", "History", "available"),
            entry(
                "Design Patterns",
                "Erich Gamma",
                "Computer Science",
                "maintenance",
            ),
        ])
    }

    #[test]
    fn matches_on_category_terms() {
        let job = RecommendationJob::new("science fiction", sample_snapshot());
        let recommendation = job.run().unwrap();

        assert_eq!(
            recommendation.matched_titles[0],
            "The Three-Body Problem"
        );
        assert!(recommendation.text.contains("The Three-Body Problem"));
        assert!(recommendation.confidence >= 0.5);
    }

    #[test]
    fn unmatched_query_offers_closest_available_titles() {
        let job = RecommendationJob::new("cookbooks", sample_snapshot());
        let recommendation = job.run().unwrap();

        assert!(recommendation.confidence < 0.5);
        // Only available copies are offered as the fallback.
        assert!(
            !recommendation
                .matched_titles
                .contains(&"Design Patterns".to_string())
        );
    }

    #[test]
    fn max_results_caps_the_reply() {
        let job = RecommendationJob::new("a", sample_snapshot()).with_max_results(1);
        let recommendation = job.run().unwrap();
        assert_eq!(recommendation.matched_titles.len(), 1);
    }

    #[test]
    fn is_deterministic() {
        let job = RecommendationJob::new("history", sample_snapshot());
        assert_eq!(job.run().unwrap(), job.run().unwrap());
    }

    #[test]
    fn blank_query_is_invalid_input() {
        let job = RecommendationJob::new("   ", sample_snapshot());
        let err = job.run().unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }

    #[test]
    fn empty_snapshot_cannot_recommend() {
        let job = RecommendationJob::new("anything", CatalogSnapshot::default());
        let err = job.run().unwrap_err();
        assert!(matches!(err, AiError::InferenceFailed(_)));
    }

    #[test]
    fn failures_degrade_to_the_fallback_message() {
        let job = RecommendationJob::new("anything", CatalogSnapshot::default());
        assert_eq!(recommend_or_fallback(&job), FALLBACK_MESSAGE);

        let job = RecommendationJob::new("history", sample_snapshot());
        assert_ne!(recommend_or_fallback(&job), FALLBACK_MESSAGE);
    }
}

//! Prompt construction for the remote recommendation model.
//!
//! The network call itself lives outside this crate; callers send these
//! prompts to whatever model backs the assistant and treat the reply as
//! opaque display text.

use crate::snapshot::CatalogSnapshot;

/// Upper bound on the serialized catalog context embedded in a prompt, so
/// large catalogs stay within the model's context window.
pub const MAX_CONTEXT_CHARS: usize = 10_000;

/// Recommendation prompt: the holdings as JSON context plus the patron's
/// query.
pub fn recommendation_prompt(query: &str, snapshot: &CatalogSnapshot) -> String {
    let context = serde_json::to_string(&snapshot.books).unwrap_or_default();
    let context = clip(&context, MAX_CONTEXT_CHARS);
    format!(
        "You are a professional librarian. These are the current holdings (JSON):\n\
         {context}\n\n\
         Patron query: \"{query}\"\n\n\
         Recommend the 1-3 most relevant titles from the holdings and briefly \
         explain why. If nothing matches exactly, suggest the closest titles. \
         Answer warmly and keep it under 200 words."
    )
}

/// Display-blurb prompt for a single title.
pub fn summary_prompt(title: &str, author: &str) -> String {
    format!(
        "Write a short display blurb (about 100 words) for \"{title}\" by \
         {author}, focusing on the core content and who should read it."
    )
}

/// Truncate on a char boundary so multi-byte titles cannot split a prompt
/// mid-character.
fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::CatalogBook;

    fn entry(title: &str, description: Option<String>) -> CatalogBook {
        CatalogBook {
            title: title.to_string(),
            author: "Anonymous".to_string(),
            category: "Fiction".to_string(),
            description,
            status: "available".to_string(),
        }
    }

    #[test]
    fn prompt_carries_query_and_holdings() {
        let snapshot = CatalogSnapshot::from_books([entry("The Three-Body Problem", None)]);
        let prompt = recommendation_prompt("hard science fiction", &snapshot);

        assert!(prompt.contains("hard science fiction"));
        assert!(prompt.contains("The Three-Body Problem"));
    }

    #[test]
    fn oversized_context_is_clipped() {
        let huge = "x".repeat(3 * MAX_CONTEXT_CHARS);
        let snapshot = CatalogSnapshot::from_books([entry("Huge", Some(huge))]);
        let prompt = recommendation_prompt("anything", &snapshot);

        assert!(prompt.chars().count() < MAX_CONTEXT_CHARS + 500);
    }

    #[test]
    fn clip_respects_char_boundaries() {
        let s = "图书馆".repeat(10);
        assert_eq!(clip(&s, 4), "图书馆图");
        assert_eq!(clip("short", 100), "short");
    }

    #[test]
    fn summary_prompt_names_the_book() {
        let prompt = summary_prompt("Sapiens", "Yuval Noah Harari");
        assert!(prompt.contains("Sapiens"));
        assert!(prompt.contains("Yuval Noah Harari"));
    }
}

//! `shelfmark-ai`
//!
//! **Responsibility:** the recommendation assistant boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the circulation store or its entities.
//! - It must not mutate domain state.
//! - It emits display-layer insights, not domain events.
//! - Its failures degrade to a fixed fallback message and never surface as
//!   store errors.

pub mod job;
pub mod prompt;
pub mod recommend;
pub mod result;
pub mod snapshot;

pub use job::AiJob;
pub use prompt::{MAX_CONTEXT_CHARS, recommendation_prompt, summary_prompt};
pub use recommend::{FALLBACK_MESSAGE, RecommendationJob, recommend_or_fallback};
pub use result::{AiError, Recommendation};
pub use snapshot::{CatalogBook, CatalogSnapshot};

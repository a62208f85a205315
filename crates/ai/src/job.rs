use crate::result::{AiError, Recommendation};

/// An inference unit over a read-only snapshot.
///
/// Jobs consume snapshots supplied by callers; this crate never reaches
/// into the circulation store. A job's failure path is its own: callers
/// degrade to a fallback message instead of propagating.
pub trait AiJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The input snapshot the job will run inference on.
    fn input(&self) -> &Self::Input;

    /// Execute inference and return an insight.
    ///
    /// Must not mutate domain state.
    fn run(&self) -> Result<Recommendation, AiError>;
}

use thiserror::Error;

/// Errors raised while observing the environment or learning from it
///
/// None of these are allowed to escape a learning tick: the learner catches
/// them at the tick boundary, logs, and skips the tick. A lookup against a
/// state that was never inserted into the value table is a programming
/// error rather than a runtime condition; it trips a debug assertion and
/// falls back to the zero estimate in release builds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearnError {
    /// The environment has not yet provided a required entity
    #[error("environment has no {0} to observe")]
    MissingEntity(&'static str),
}

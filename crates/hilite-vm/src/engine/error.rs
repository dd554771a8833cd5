//! Errors that can occur while walking text.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many steps without progress).
    #[error("runtime execution limit exceeded")]
    ExecFuelExhausted,

    /// Too many spans open at once.
    #[error("span nesting limit exceeded")]
    NestingLimitExceeded,
}

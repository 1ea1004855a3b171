use thiserror::Error;

/// Reasons a sample store can be rejected by `fit` / `set_raw_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    /// The two coordinate sequences (or a destination buffer and its queries)
    /// have different lengths.
    #[error("interp: slice length mismatch (expected {expected}, found {found})")]
    LengthMismatch { expected: usize, found: usize },

    /// `x[index]` is not strictly greater than `x[index - 1]`.
    #[error("interp: entries not sorted at index {index}")]
    NotSorted { index: usize },

    #[error("interp: {found} points given, at least {required} required")]
    TooFewPoints { found: usize, required: usize },
}

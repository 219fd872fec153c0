//! Objective function abstractions.
//!
//! The optimizer minimizes any `FnMut(&[f64]) -> ObjectiveResult<f64>`. A
//! failing objective aborts the current generation and the error is handed
//! back to the caller unchanged.

use thiserror::Error;

/// Convenience alias used by objective functions.
pub type ObjectiveResult<T> = Result<T, ObjectiveError>;

/// Errors produced while evaluating a candidate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectiveError {
    /// The candidate contains the wrong number of decision variables.
    #[error("candidate has {found} decision variables but objective expects {expected}")]
    DimensionMismatch {
        /// Number of variables expected by the objective.
        expected: usize,
        /// Number of variables provided by the candidate.
        found: usize,
    },
    /// The objective returned `NaN`.
    #[error("objective returned NaN for candidate {genes:?}")]
    NotANumber {
        /// Genes of the offending candidate.
        genes: Vec<f64>,
    },
    /// Domain-specific failure reported by the objective itself.
    #[error("objective evaluation failed: {0}")]
    Failed(String),
}

impl ObjectiveError {
    /// Builds an [`ObjectiveError::Failed`] from any message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Checks that a candidate has the expected number of variables.
///
/// # Errors
/// Returns [`ObjectiveError::DimensionMismatch`] when `genes.len()` differs
/// from `expected`.
pub fn check_dimensions(genes: &[f64], expected: usize) -> ObjectiveResult<()> {
    if genes.len() != expected {
        return Err(ObjectiveError::DimensionMismatch {
            expected,
            found: genes.len(),
        });
    }
    Ok(())
}

/// Lifts an infallible objective into the fallible signature the optimizer
/// expects.
///
/// # Examples
/// ```
/// use simple_ga::objective::infallible;
/// let mut objective = infallible(simple_ga::functions::sphere);
/// assert_eq!(objective(&[1.0, 2.0][..]).unwrap(), 5.0);
/// ```
pub fn infallible<F>(mut objective: F) -> impl FnMut(&[f64]) -> ObjectiveResult<f64>
where
    F: FnMut(&[f64]) -> f64,
{
    move |genes| Ok(objective(genes))
}

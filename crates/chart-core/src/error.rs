// File: crates/chart-core/src/error.rs
// Summary: Error type for plan building and serialisation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("available width must be a positive, finite number of pixels (got {0})")]
    InvalidWidth(f64),
    #[error("failed to write chart markup")]
    Format(#[from] std::fmt::Error),
}

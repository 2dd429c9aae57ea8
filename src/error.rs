//! Simulation error types

use std::collections::TryReserveError;

use thiserror::Error;

/// Failures that can escape a simulation step
///
/// Transform math, culling and drawing are total; the only fallible work is
/// growing the entity sequences.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to grow {what} storage")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl SimError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| SimError::Allocation { what, source }
    }
}

/// Result alias for simulation operations
pub type SimResult<T> = Result<T, SimError>;

//! Shared error types for the crate.
//!
//! The linguistic and counting functions are total and never fail; the only
//! fallible seam is handing source text to the host grammar.

use thiserror::Error;

/// Error type for the analysis entry points.
#[derive(Debug, Error)]
pub enum NomenError {
    /// Source text could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] syn::Error),
}

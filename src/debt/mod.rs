//! Technical-debt shape checks

pub mod commented_code;

pub use commented_code::{looks_like_code, looks_like_code_with_resolver};

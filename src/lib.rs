// Export modules for library usage
pub mod common;
pub mod complexity;
pub mod config;
pub mod debt;
pub mod errors;
pub mod linguistics;
pub mod metrics;
pub mod syntax;

// Re-export commonly used types
pub use crate::config::MetricThresholds;
pub use crate::errors::NomenError;
pub use crate::linguistics::articles::article_for;
pub use crate::linguistics::pluralizer::Pluralizer;
pub use crate::linguistics::verbalizer::{
    is_third_person_singular_verb, make_gerund_verb, make_infinite_verb,
    make_third_person_singular_verb, try_make_verb,
};
pub use crate::metrics::{analyze_file, analyze_source, FunctionMetrics};
pub use crate::syntax::{collect_symbols, Symbol, SymbolKind};

pub use crate::debt::commented_code::{looks_like_code, looks_like_code_with_resolver};

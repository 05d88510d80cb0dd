//! English-morphology engines behind the naming rules
//!
//! Three small engines, all driven by ordered data tables: plural
//! suggestion, verb derivation and indefinite-article selection. Every
//! function here is total; an input no rule understands comes back
//! unchanged or unanswered instead of failing.

pub mod articles;
pub mod pluralizer;
pub mod verbalizer;

pub use articles::article_for;
pub use pluralizer::Pluralizer;
pub use verbalizer::{
    is_third_person_singular_verb, make_gerund_verb, make_infinite_verb,
    make_third_person_singular_verb, try_make_verb,
};

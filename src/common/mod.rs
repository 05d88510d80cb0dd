//! Common utilities shared across the crate

pub mod text;

pub use text::{
    capitalize_first, ends_with_any_ignore_case, ends_with_ignore_case, first_word, is_capitalized,
    is_vowel, split_words, trim_suffix_ignore_case,
};

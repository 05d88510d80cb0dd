//! Text manipulation utilities
//!
//! Identifier-aware helpers shared by the naming rules. Word splitting
//! understands camelCase, PascalCase, snake_case and acronym runs, so
//! `parseURLPath` splits into `parse`, `URL`, `Path`.

/// Capitalizes the first character of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Returns true when `value` ends with `suffix`, ignoring ASCII case.
pub fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.as_bytes()[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Returns true when `value` ends with any entry of `suffixes`, ignoring ASCII case.
pub fn ends_with_any_ignore_case(value: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| ends_with_ignore_case(value, suffix))
}

/// Removes `suffix` from the end of `value`, ignoring ASCII case.
///
/// The input comes back unchanged when the suffix is absent or when the cut
/// would fall inside a multi-byte character.
pub fn trim_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || !ends_with_ignore_case(value, suffix) {
        return value;
    }
    let cut = value.len() - suffix.len();
    if value.is_char_boundary(cut) {
        &value[..cut]
    } else {
        value
    }
}

/// Returns true when the string starts with an uppercase letter.
pub fn is_capitalized(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Returns true for the five ASCII vowels in either case.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Splits an identifier into its words.
///
/// Boundaries are separators, lower-to-upper transitions and the end of an
/// acronym run (the last uppercase letter before a lowercase one starts the
/// next word).
pub fn split_words(identifier: &str) -> Vec<&str> {
    let marked: Vec<(usize, char)> = identifier.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in marked.iter().enumerate() {
        if is_separator(c) {
            if let Some(s) = start.take() {
                words.push(&identifier[s..pos]);
            }
            continue;
        }
        match start {
            None => start = Some(pos),
            Some(s) => {
                if c.is_uppercase() && starts_new_word(&marked, i) {
                    words.push(&identifier[s..pos]);
                    start = Some(pos);
                }
            }
        }
    }
    if let Some(s) = start {
        words.push(&identifier[s..]);
    }
    words
}

fn starts_new_word(marked: &[(usize, char)], i: usize) -> bool {
    let prev = marked[i - 1].1;
    if prev.is_lowercase() || prev.is_numeric() {
        return true;
    }
    // Acronym run ends one letter before the next lowercase word.
    prev.is_uppercase() && marked.get(i + 1).is_some_and(|&(_, next)| next.is_lowercase())
}

/// Returns the first word of an identifier without allocating.
pub fn first_word(identifier: &str) -> &str {
    let trimmed = identifier.trim_start_matches(is_separator);
    let marked: Vec<(usize, char)> = trimmed.char_indices().collect();
    for (i, &(pos, c)) in marked.iter().enumerate() {
        if is_separator(c) {
            return &trimmed[..pos];
        }
        if i > 0 && c.is_uppercase() && starts_new_word(&marked, i) {
            return &trimmed[..pos];
        }
    }
    trimmed
}

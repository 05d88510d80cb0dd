//! Indefinite article selection
//!
//! Picks `A ` or `An ` for the word that follows, based on how the word is
//! pronounced rather than how it is spelled. Exception lists cover silent
//! consonants (`hour`) and glide-vowel words (`user`, `unique`).

/// Words starting with a silent consonant; they take `An `.
const SILENT_CONSONANT_WORDS: &[&str] = &["heir", "herb", "honest", "honor", "honour", "hour"];

/// Vowel-spelled words pronounced with a leading glide; they take `A `.
const GLIDE_VOWEL_WORDS: &[&str] = &[
    "euro",
    "european",
    "once",
    "one",
    "unary",
    "unicode",
    "unicorn",
    "uniform",
    "union",
    "unique",
    "unit",
    "unity",
    "universal",
    "universe",
    "university",
    "uri",
    "url",
    "usage",
    "use",
    "user",
    "utility",
    "uuid",
];

/// Returns the indefinite article for `word`, with a trailing space.
///
/// The empty string gets `A ` so callers can prepend unconditionally.
pub fn article_for(word: &str) -> &'static str {
    let trimmed = word.trim();
    if SILENT_CONSONANT_WORDS
        .iter()
        .any(|entry| trimmed.eq_ignore_ascii_case(entry))
    {
        return "An ";
    }
    if GLIDE_VOWEL_WORDS
        .iter()
        .any(|entry| trimmed.eq_ignore_ascii_case(entry))
    {
        return "A ";
    }
    match trimmed.chars().next() {
        Some(first) if crate::common::text::is_vowel(first) => "An ",
        _ => "A ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_initial_words_take_an() {
        assert_eq!(article_for("Apple"), "An ");
        assert_eq!(article_for("index"), "An ");
        assert_eq!(article_for("error"), "An ");
        assert_eq!(article_for("object"), "An ");
    }

    #[test]
    fn consonant_initial_words_take_a() {
        assert_eq!(article_for("value"), "A ");
        assert_eq!(article_for("Node"), "A ");
        assert_eq!(article_for("7bit"), "A ");
    }

    #[test]
    fn silent_consonants_take_an() {
        assert_eq!(article_for("hour"), "An ");
        assert_eq!(article_for("Honest"), "An ");
        assert_eq!(article_for("herb"), "An ");
        assert_eq!(article_for("honour"), "An ");
    }

    #[test]
    fn glide_vowels_take_a() {
        assert_eq!(article_for("user"), "A ");
        assert_eq!(article_for("Unique"), "A ");
        assert_eq!(article_for("url"), "A ");
        assert_eq!(article_for("UUID"), "A ");
        assert_eq!(article_for("one"), "A ");
        assert_eq!(article_for("euro"), "A ");
    }

    #[test]
    fn empty_input_defaults_to_a() {
        assert_eq!(article_for(""), "A ");
        assert_eq!(article_for("   "), "A ");
    }
}

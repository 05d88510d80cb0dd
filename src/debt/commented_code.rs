//! Commented-out code detection
//!
//! Decides whether one line of comment text looks like disabled code rather
//! than prose. The check is an ordered cascade of shape heuristics; the
//! first rule with an opinion wins, and a line no rule recognizes is prose.
//!
//! Each rule is cheap and line-local. The optional resolver hook lets the
//! caller promote a line whose first word is a known type or symbol name,
//! which catches assignments that carry no other code shape.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords that open a declaration or binding; a space must follow so
/// prose like `Letters arrived` is not flagged. `var` and `function` catch
/// snippets pasted from other languages.
const DECLARATION_STARTERS: &[&str] = &[
    "async ", "const ", "crate ", "enum ", "extern ", "fn ", "function ", "impl ", "let ", "mod ",
    "pub ", "static ", "struct ", "trait ", "type ", "unsafe ", "use ", "var ",
];

/// Substrings that rarely appear outside code.
const CONTROL_MARKERS: &[&str] = &[
    "if (",
    "if(",
    "while (",
    "while(",
    "for (",
    "for(",
    "=>",
    "->",
    "&&",
    "||",
    "?;",
    ".await",
    ".unwrap()",
    ".expect(",
    ".iter()",
    "!(",
];

/// Constructor and literal shapes.
const CONSTRUCTION_MARKERS: &[&str] = &["::new(", "vec![", "::default()"];

/// Comment markers that are tooling or documentation, not disabled code.
const IGNORABLE_COMMENT_MARKERS: &[&str] = &["///", "//!", "clippy::", "rustfmt::", "rust-analyzer"];

/// Two-character operators that mark an expression statement.
const OPERATOR_MARKERS: &[&str] = &["==", "!=", "<=", ">=", "+=", "-=", "*=", "/="];

/// Method calls that only make sense on code.
const LOCK_MARKERS: &[&str] = &[".lock(", ".borrow(", ".borrow_mut("];

static FRAME_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[=\-*_]{3,}$").expect("frame line pattern is valid")
});

/// Returns true when the comment line looks like commented-out code.
pub fn looks_like_code(line: &str) -> bool {
    classify(line, None)
}

/// Like [`looks_like_code`], with a resolver consulted for assignment-shaped
/// lines whose first word may be a known symbol.
pub fn looks_like_code_with_resolver<F>(line: &str, resolver: F) -> bool
where
    F: Fn(&str) -> bool,
{
    classify(line, Some(&resolver))
}

fn classify(line: &str, resolver: Option<&dyn Fn(&str) -> bool>) -> bool {
    let text = line.trim();
    if text.is_empty() {
        return false;
    }
    if is_dangling_else(text) || has_brace(text) {
        return true;
    }
    if starts_with_declaration(text) || has_control_marker(text) {
        return true;
    }
    if let Some(verdict) = judge_nested_comment(text) {
        return verdict;
    }
    if has_construction_marker(text) {
        return true;
    }
    if is_frame_line(text) {
        return false;
    }
    if judge_statement_shape(text, resolver) {
        return true;
    }
    if is_dangling_method_chain(text) {
        return true;
    }
    has_lock_marker(text)
}

fn is_dangling_else(text: &str) -> bool {
    text == "else"
}

fn has_brace(text: &str) -> bool {
    text.contains(['{', '}'])
}

fn starts_with_declaration(text: &str) -> bool {
    DECLARATION_STARTERS.iter().any(|kw| text.starts_with(kw))
}

fn has_control_marker(text: &str) -> bool {
    CONTROL_MARKERS.iter().any(|marker| text.contains(marker))
}

/// A comment delimiter inside the line usually means a comment was
/// commented out along with its code. URLs, doc markers and tool pragmas
/// are the exceptions.
fn judge_nested_comment(text: &str) -> Option<bool> {
    if !text.contains("//") {
        return None;
    }
    if text.contains("://") || text.ends_with("//") {
        return Some(false);
    }
    if IGNORABLE_COMMENT_MARKERS.iter().any(|marker| text.contains(marker)) {
        return Some(false);
    }
    Some(true)
}

fn has_construction_marker(text: &str) -> bool {
    CONSTRUCTION_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Decorative separator rows like `-----` or `====`.
fn is_frame_line(text: &str) -> bool {
    FRAME_LINE.is_match(text)
}

/// Statement-shaped lines end in `;` or carry an assignment. Punctuation
/// normally settles it; otherwise the resolver may recognize the first
/// word as a symbol in scope.
fn judge_statement_shape(text: &str, resolver: Option<&dyn Fn(&str) -> bool>) -> bool {
    if !text.ends_with(';') && !text.contains('=') {
        return false;
    }
    if text.contains('.') || text.contains(['(', ')', '[', ']', '<', '>']) {
        return true;
    }
    if OPERATOR_MARKERS.iter().any(|op| text.contains(op)) {
        return true;
    }
    match (resolver, first_identifier(text)) {
        (Some(resolve), Some(word)) => resolve(word),
        _ => false,
    }
}

fn first_identifier(text: &str) -> Option<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .find(|word| !word.is_empty())
}

fn is_dangling_method_chain(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('.')
        && chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
}

fn has_lock_marker(text: &str) -> bool {
    LOCK_MARKERS.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_prose() {
        assert!(!looks_like_code(""));
        assert!(!looks_like_code("   "));
    }

    #[test]
    fn dangling_else_is_code() {
        assert!(looks_like_code("else"));
        assert!(looks_like_code("  else  "));
        assert!(!looks_like_code("or else the cache goes stale"));
    }

    #[test]
    fn braces_are_code() {
        assert!(looks_like_code("}"));
        assert!(looks_like_code("if ready {"));
        assert!(looks_like_code("} else {"));
    }

    #[test]
    fn declaration_keywords_are_code() {
        assert!(looks_like_code("let x = 5;"));
        assert!(looks_like_code("fn helper() -> bool"));
        assert!(looks_like_code("use std::fmt;"));
        assert!(looks_like_code("struct Widget;"));
    }

    #[test]
    fn foreign_declaration_keywords_are_code() {
        assert!(looks_like_code("var x = 5;"));
        assert!(looks_like_code("function render()"));
        assert!(!looks_like_code("variable names matter"));
    }

    #[test]
    fn capitalized_prose_is_not_a_declaration() {
        assert!(!looks_like_code("Let me know if this breaks"));
        assert!(!looks_like_code("Use the second overload instead"));
        assert!(!looks_like_code("Type names are resolved lazily"));
    }

    #[test]
    fn control_markers_are_code() {
        assert!(looks_like_code("while (pending)"));
        assert!(looks_like_code("x && y"));
        assert!(looks_like_code("value.unwrap()"));
        assert!(looks_like_code("items.iter()"));
        assert!(looks_like_code("println!(\"done\")"));
        assert!(looks_like_code("Some(v) => v"));
    }

    #[test]
    fn urls_are_prose() {
        assert!(!looks_like_code("see https://example.com/docs for details"));
        assert!(!looks_like_code("ftp://mirror.example.org"));
    }

    #[test]
    fn nested_comments_are_code() {
        assert!(looks_like_code("x += 1; // bump the counter"));
        assert!(!looks_like_code("trailing marker //"));
        assert!(!looks_like_code("/// Returns the widget count"));
        assert!(!looks_like_code("//! Module docs"));
        assert!(!looks_like_code("#[allow(clippy::too_many_arguments)] // clippy:: noise"));
    }

    #[test]
    fn construction_markers_are_code() {
        assert!(looks_like_code("Widget::new(7)"));
        assert!(looks_like_code("vec![1, 2, 3]"));
        assert!(looks_like_code("Config::default()"));
    }

    #[test]
    fn frame_lines_are_prose() {
        assert!(!looks_like_code("------------------------------"));
        assert!(!looks_like_code("===="));
        assert!(!looks_like_code("***"));
        assert!(!looks_like_code("___"));
    }

    #[test]
    fn punctuation_heavy_statements_are_code() {
        assert!(looks_like_code("total = compute(a, b);"));
        assert!(looks_like_code("flag = x == y;"));
        assert!(looks_like_code("counter += 1;"));
        assert!(looks_like_code("self.field = value;"));
    }

    #[test]
    fn bare_operator_noise_is_prose() {
        assert!(!looks_like_code("==="));
        assert!(!looks_like_code("opinions differ"));
        assert!(!looks_like_code("ready or not"));
    }

    #[test]
    fn plain_assignment_needs_a_resolver() {
        let line = "width = height;";
        assert!(!looks_like_code(line));
        assert!(looks_like_code_with_resolver(line, |word| word == "width"));
        assert!(!looks_like_code_with_resolver(line, |_| false));
    }

    #[test]
    fn resolver_sees_the_first_identifier() {
        let seen = std::cell::RefCell::new(Vec::new());
        looks_like_code_with_resolver("width = height;", |word| {
            seen.borrow_mut().push(word.to_string());
            false
        });
        assert_eq!(seen.into_inner(), vec!["width".to_string()]);
    }

    #[test]
    fn method_chains_are_code() {
        assert!(looks_like_code(".collect()"));
        assert!(looks_like_code(".filter(predicate)"));
        assert!(!looks_like_code("...and so on"));
    }

    #[test]
    fn lock_markers_are_code() {
        assert!(looks_like_code("guard.lock("));
        assert!(looks_like_code("cell.borrow_mut("));
    }

    #[test]
    fn ordinary_prose_falls_through() {
        assert!(!looks_like_code("this routine used to be slower"));
        assert!(!looks_like_code("TODO revisit once the parser is stable"));
    }
}

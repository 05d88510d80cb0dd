//! Plural name suggestion
//!
//! Derives the plural form a collection-valued identifier should carry.
//! `itemList` wants to become `items`, `child` wants `children`, and a name
//! like `keysDown` is already fine because its first word is plural.
//!
//! # Methodology
//!
//! A name runs through four stages, stopping at the first that decides:
//!
//! 1. Exempt names (`map`, `cache`, `whiteList`, ...) are acceptable as-is.
//! 2. An ordered suffix table handles irregular endings. The first matching
//!    entry wins, so already-plural endings sit above the rules that would
//!    mangle them (`-ays` must be seen before `-ys`).
//! 3. Entity markers (`Model`, `ToConvert`, ...) are stripped from the tail.
//! 4. A plain `s` is appended unless the name, or its first word, already
//!    ends in one. Known collisions with reserved words are then rewritten
//!    (`bases` becomes `items`).
//!
//! Names that are already plural come back unchanged. Lookups are memoized
//! per [`Pluralizer`], which is safe to share across analysis threads.

use dashmap::DashMap;

use crate::common::text::{ends_with_ignore_case, first_word, is_vowel, trim_suffix_ignore_case};

/// Names a collection may keep without a plural suggestion.
const EXEMPT_NAMES: &[&str] = &[
    "allowList",
    "array",
    "blackList",
    "cache",
    "denyList",
    "ignoreList",
    "info",
    "list",
    "map",
    "metadata",
    "pool",
    "queue",
    "set",
    "stack",
    "whiteList",
];

/// Tail markers that name the element type rather than the collection.
///
/// Ordered longest first so `ToConvert` is removed before `Model` gets a
/// chance to match inside it.
const ENTITY_MARKERS: &[&str] = &["ToConvert", "ToModel", "Element", "Entity", "Model"];

/// Plural candidates that collide with likely reserved or keyword-like names.
const COLLISION_OVERRIDES: &[(&str, &str)] = &[
    ("bases", "items"),
    ("_bases", "_items"),
    ("m_bases", "m_items"),
    ("sources", "source"),
    ("_sources", "_source"),
    ("m_sources", "m_source"),
];

/// What to do with a name once its suffix entry matched.
#[derive(Clone, Copy)]
enum PluralAction {
    /// Append the given ending to the whole name.
    Append(&'static str),
    /// Strip the matched suffix and append this instead.
    Replace(&'static str),
    /// The name is already plural.
    Keep,
    /// Replace the whole name with a fixed word.
    Literal(&'static str),
    /// Drop the final character.
    DropLast,
    /// `-y` becomes `-ies` after a consonant, plain `-ys` after a vowel.
    YToIes,
}

/// Ordered suffix table; the first matching entry wins.
///
/// Already-plural endings such as `ays` and `eys` must appear before the
/// `ys` entry that rewrites to `ies`, and `nformations` before the
/// `nformation` entry it would otherwise shadow.
const PLURAL_SUFFIX_RULES: &[(&str, PluralAction)] = &[
    ("ay", PluralAction::Append("s")),
    ("ey", PluralAction::Append("s")),
    ("y", PluralAction::YToIes),
    ("ays", PluralAction::Keep),
    ("eys", PluralAction::Keep),
    ("children", PluralAction::Keep),
    ("data", PluralAction::Keep),
    ("ys", PluralAction::Replace("ies")),
    ("ss", PluralAction::Append("es")),
    ("sh", PluralAction::Append("es")),
    ("ed", PluralAction::Keep),
    ("child", PluralAction::Append("ren")),
    ("complete", PluralAction::Literal("all")),
    ("datas", PluralAction::DropLast),
    ("ndex", PluralAction::Replace("ndices")),
    ("nformations", PluralAction::DropLast),
    ("nformation", PluralAction::Keep),
];

/// Computes the plural suggestion for `name`.
///
/// Returns `None` when the name is blank or exempt, meaning no suggestion
/// should be made.
fn pluralize(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    if EXEMPT_NAMES.iter().any(|exempt| trimmed.eq_ignore_ascii_case(exempt)) {
        return None;
    }
    if let Some(result) = apply_suffix_rules(trimmed) {
        return Some(result);
    }
    Some(apply_default_rule(trimmed))
}

fn apply_suffix_rules(name: &str) -> Option<String> {
    let (suffix, action) = PLURAL_SUFFIX_RULES
        .iter()
        .find(|(suffix, _)| ends_with_ignore_case(name, suffix))?;
    let stem = trim_suffix_ignore_case(name, suffix);
    let result = match action {
        PluralAction::Append(ending) => format!("{name}{ending}"),
        PluralAction::Replace(ending) => format!("{stem}{ending}"),
        PluralAction::Keep => name.to_string(),
        PluralAction::Literal(word) => (*word).to_string(),
        PluralAction::DropLast => stem_without_last(name).to_string(),
        PluralAction::YToIes => match stem.chars().last() {
            Some(previous) if is_vowel(previous) => format!("{name}s"),
            _ => format!("{stem}ies"),
        },
    };
    Some(result)
}

fn stem_without_last(name: &str) -> &str {
    let mut chars = name.chars();
    chars.next_back();
    chars.as_str()
}

fn apply_default_rule(name: &str) -> String {
    let stripped = strip_entity_markers(name);
    let candidate = if ends_with_ignore_case(stripped, "s")
        || ends_with_ignore_case(first_word(stripped), "s")
    {
        stripped.to_string()
    } else {
        format!("{stripped}s")
    };
    resolve_collision(candidate)
}

fn strip_entity_markers(name: &str) -> &str {
    let mut current = name;
    loop {
        let mut stripped = false;
        for marker in ENTITY_MARKERS {
            let shorter = trim_suffix_ignore_case(current, marker);
            if shorter.len() != current.len() && !shorter.is_empty() {
                current = shorter;
                stripped = true;
                break;
            }
        }
        if !stripped {
            return current;
        }
    }
}

fn resolve_collision(candidate: String) -> String {
    COLLISION_OVERRIDES
        .iter()
        .find(|(from, _)| *from == candidate)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(candidate)
}

/// Memoizing plural provider.
///
/// One instance is shared by every naming rule of an analysis run; the
/// cache is concurrent, and the first computed value for a name wins when
/// two threads race on the same miss.
pub struct Pluralizer {
    cache: DashMap<String, String>,
}

impl Pluralizer {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Returns the plural suggestion for `name`.
    ///
    /// Exempt and blank names come back unchanged, signalling that no
    /// rename is needed.
    pub fn plural_of(&self, name: &str) -> String {
        if let Some(hit) = self.cache.get(name) {
            return hit.clone();
        }
        log::trace!("plural cache miss for {name:?}");
        let computed = pluralize(name).unwrap_or_else(|| name.to_string());
        self.cache.entry(name.to_string()).or_insert(computed).clone()
    }

    /// Pluralizes the part of `name` in front of the first matching suffix.
    ///
    /// `plural_for_suffixes("itemList", &["List"])` yields `items`. Returns
    /// `None` when no suffix matches or nothing remains once it is removed.
    pub fn plural_for_suffixes(&self, name: &str, suffixes: &[&str]) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let suffix = suffixes
            .iter()
            .find(|suffix| !suffix.is_empty() && ends_with_ignore_case(trimmed, suffix))?;
        let stem = trim_suffix_ignore_case(trimmed, suffix);
        if stem.is_empty() {
            return None;
        }
        Some(self.plural_of(stem))
    }

    /// Drops every memoized entry.
    pub fn reset(&self) {
        self.cache.clear();
    }

    /// Number of memoized names.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

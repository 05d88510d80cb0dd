//! Verb derivation for identifier names
//!
//! Method-ish names should start with an action. This module turns noun
//! forms back into verbs (`Configuration` into `Configure`) and conjugates
//! verbs between their infinite, third-person-singular and gerund forms.
//!
//! # Methodology
//!
//! [`try_make_verb`] first checks the name against an allow-list of phrases
//! that already read as actions; a match means no suggestion is needed. It
//! then scans an ordered table of nominalization endings and returns the
//! first rewrite that differs from the input. Both tables are plain data:
//! the phrase list is sorted shortest first, then alphabetically, and the
//! ending table is sorted by descending suffix length so specific endings
//! always win over the general ones they contain.
//!
//! The conjugation helpers are total; a blank or single-letter input comes
//! back unchanged.

use crate::common::text::{
    capitalize_first, ends_with_any_ignore_case, ends_with_ignore_case, is_capitalized, is_vowel,
    trim_suffix_ignore_case,
};

/// Name prefixes that already read as an action.
///
/// A name is acceptable when it equals an entry or continues after one with
/// an uppercase letter or underscore, so `DoAction` and `do_action` both
/// pass. Sorted shortest first, then alphabetically.
const ACTION_PHRASES: &[&str] = &[
    // two letters
    "Do", "Go", "Is",
    // three letters
    "Add", "Can", "Fix", "Get", "Has", "Log", "Put", "Run", "Set", "Try",
    // four letters
    "Call", "Copy", "Drop", "Emit", "Exit", "Fill", "Find", "Hide", "Init", "Join", "Keep",
    "Load", "Lock", "Make", "Mark", "Move", "Open", "Peek", "Poll", "Push", "Read", "Redo",
    "Save", "Scan", "Seek", "Send", "Show", "Sign", "Skip", "Sort", "Stop", "Swap", "Sync",
    "Take", "Test", "Trim", "Undo", "Wait", "Warn", "Wrap",
    // five letters
    "Abort", "Align", "Apply", "Begin", "Build", "Catch", "Check", "Clean", "Clear", "Clone",
    "Close", "Count", "Defer", "Enter", "Fetch", "Flush", "Force", "Leave", "Limit", "Match",
    "Merge", "Parse", "Patch", "Pause", "Print", "Prune", "Purge", "Query", "Quote", "Raise",
    "Reset", "Retry", "Setup", "Shift", "Solve", "Spawn", "Split", "Start", "Store", "Strip",
    "Throw", "Touch", "Trace", "Track", "Unset", "Visit", "Watch", "Write", "Yield",
    // six letters
    "Accept", "Action", "Adjust", "Append", "Assert", "Assign", "Attach", "Cancel", "Change",
    "Choose", "Commit", "Create", "Decode", "Define", "Delete", "Deploy", "Detach", "Detect",
    "Divide", "Enable", "Encode", "Ensure", "Escape", "Expand", "Expect", "Export", "Extend",
    "Filter", "Finish", "Format", "Handle", "Ignore", "Import", "Inform", "Inject", "Insert",
    "Invoke", "Launch", "Listen", "Locate", "Lookup", "Manage", "Modify", "Notify", "Reduce",
    "Reject", "Reload", "Remove", "Rename", "Render", "Repeat", "Report", "Resize", "Resume",
    "Return", "Revert", "Revoke", "Rotate", "Search", "Select", "Submit", "Switch", "Toggle",
    "Unbind", "Unload", "Unlock", "Unpack", "Unwrap", "Update", "Upload", "Verify",
    // seven letters
    "Analyze", "Archive", "Arrange", "Attempt", "Average", "Balance", "Capture", "Cleanup",
    "Collect", "Combine", "Compare", "Compile", "Compose", "Compute", "Confirm", "Connect",
    "Consume", "Convert", "Correct", "Declare", "Decrypt", "Deliver", "Destroy", "Discard",
    "Dismiss", "Display", "Dispose", "Encrypt", "Enforce", "Enhance", "Enqueue", "Examine",
    "Execute", "Explain", "Explore", "Extract", "Flatten", "Forward", "Inspect", "Install",
    "Measure", "Migrate", "Monitor", "Observe", "Perform", "Persist", "Prepare", "Present",
    "Prevent", "Process", "Produce", "Publish", "Receive", "Recover", "Recycle", "Refresh",
    "Release", "Reorder", "Replace", "Request", "Require", "Resolve", "Restart", "Restore",
    "Rewrite", "Shuffle", "Suggest", "Support", "Suspend", "Trigger", "Upgrade",
    // eight letters
    "Activate", "Annotate", "Assemble", "Complete", "Continue", "Decorate", "Decrease",
    "Describe", "Diagnose", "Dispatch", "Download", "Evaluate", "Finalize", "Function",
    "Generate", "Identify", "Increase", "Indicate", "Navigate", "Organize", "Populate",
    "Position", "Postpone", "Preserve", "Redirect", "Register", "Relocate", "Remember",
    "Retrieve", "Schedule", "Separate", "Simplify", "Simulate", "Subtract", "Traverse",
    "Truncate", "Validate",
    // nine letters
    "Aggregate", "Associate", "Calculate", "Condition", "Configure", "Determine", "Duplicate",
    "Enumerate", "Highlight", "Implement", "Interpret", "Normalize", "Overwrite", "Propagate",
    "Recognize", "Reconnect", "Serialize", "Translate",
    // ten letters
    "Accumulate", "Coordinate", "Initialize", "Invalidate", "Synthesize",
    // eleven letters
    "Deserialize", "Instantiate",
];

/// Nouns whose verb replaces the whole word rather than a suffix.
const NOMINALIZED_WORDS: &[(&str, &str)] = &[("decision", "decide"), ("usage", "use")];

/// Noun endings and the verb endings that replace them.
///
/// Scanned in order; sorted by descending suffix length so that, say,
/// `uration` claims `Configuration` before the plain `ation` entry would
/// produce `Configurate`.
const NOMINALIZATION_ENDINGS: &[(&str, &str)] = &[
    ("reparation", "repare"),
    ("claration", "clare"),
    ("cognition", "cognize"),
    ("epetition", "epeat"),
    ("ification", "ify"),
    ("mentation", "ment"),
    ("ploration", "plore"),
    ("scription", "scribe"),
    ("storation", "store"),
    ("velopment", "velop"),
    ("allation", "all"),
    ("currence", "cur"),
    ("eception", "eceive"),
    ("ellation", "el"),
    ("ervision", "ervise"),
    ("gression", "gress"),
    ("justment", "just"),
    ("lacement", "lace"),
    ("nversion", "nvert"),
    ("pilation", "pile"),
    ("ployment", "ploy"),
    ("pression", "press"),
    ("sistency", "sist"),
    ("stration", "ster"),
    ("sumption", "sume"),
    ("vocation", "voke"),
    ("aration", "arate"),
    ("clusion", "clude"),
    ("ddition", "dd"),
    ("duction", "duce"),
    ("endence", "end"),
    ("endency", "end"),
    ("evision", "evise"),
    ("ference", "fer"),
    ("gnature", "gn"),
    ("gnition", "gnite"),
    ("gration", "grate"),
    ("haviour", "have"),
    ("inition", "ine"),
    ("istence", "ist"),
    ("ivision", "ivide"),
    ("ization", "ize"),
    ("mission", "mit"),
    ("ncement", "nce"),
    ("olution", "olve"),
    ("oration", "orate"),
    ("orption", "orb"),
    ("osition", "ose"),
    ("ovision", "ovide"),
    ("pension", "pend"),
    ("rmation", "rm"),
    ("tenance", "tain"),
    ("tension", "tend"),
    ("ulation", "ulate"),
    ("uration", "ure"),
    ("gement", "ge"),
    ("gnment", "gn"),
    ("havior", "have"),
    ("ptance", "pt"),
    ("rement", "re"),
    ("rmance", "rm"),
    ("tement", "te"),
    ("thesis", "thesize"),
    ("ation", "ate"),
    ("ction", "ct"),
    ("erage", "er"),
    ("etion", "ete"),
    ("ieval", "ieve"),
    ("ilure", "il"),
    ("orage", "ore"),
    ("osure", "ose"),
    ("posal", "pose"),
    ("ption", "pt"),
    ("ution", "ute"),
    ("oval", "ove"),
    ("ysis", "yze"),
];

/// Two-letter endings that mark a trailing `s` as part of the stem.
const SIBILANT_ENDINGS: &[&str] = &["as", "is", "os", "ss", "us", "xs", "zs"];

/// Monosyllabic-looking stems that double their final consonant anyway.
const DOUBLING_STEMS: &[&str] = &["begin", "commit", "format", "omit", "submit", "transmit"];

/// Consonants that double before `ing` after a single vowel.
const DOUBLING_CONSONANTS: &[char] = &['b', 'd', 'g', 'm', 'n', 'p', 'r', 't'];

/// Derives a verb phrase from a noun-like name.
///
/// Returns `None` when the name is blank, already reads as an action, or no
/// ending rule produces something new.
///
/// ```
/// use nomen::linguistics::verbalizer::try_make_verb;
///
/// assert_eq!(try_make_verb("Configuration"), Some("Configure".to_string()));
/// assert_eq!(try_make_verb("DoAction"), None);
/// ```
pub fn try_make_verb(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || reads_as_action(trimmed) {
        return None;
    }
    if let Some(&(_, verb)) = NOMINALIZED_WORDS
        .iter()
        .find(|(noun, _)| trimmed.eq_ignore_ascii_case(noun))
    {
        return Some(match_input_case(trimmed, verb));
    }
    for (suffix, replacement) in NOMINALIZATION_ENDINGS {
        if !ends_with_ignore_case(trimmed, suffix) {
            continue;
        }
        let stem = trim_suffix_ignore_case(trimmed, suffix);
        if stem.is_empty() {
            continue;
        }
        let candidate = format!("{stem}{replacement}");
        if candidate != trimmed {
            return Some(candidate);
        }
    }
    None
}

/// Returns true when `name` starts with an acceptable action phrase.
fn reads_as_action(name: &str) -> bool {
    ACTION_PHRASES
        .iter()
        .any(|phrase| strip_phrase(name, phrase).is_some_and(word_boundary_follows))
}

fn strip_phrase<'a>(name: &'a str, phrase: &str) -> Option<&'a str> {
    if name.len() < phrase.len() || !name.is_char_boundary(phrase.len()) {
        return None;
    }
    let (head, rest) = name.split_at(phrase.len());
    head.eq_ignore_ascii_case(phrase).then_some(rest)
}

fn word_boundary_follows(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_uppercase() || c == '_',
    }
}

fn match_input_case(input: &str, verb: &str) -> String {
    if is_capitalized(input) {
        capitalize_first(verb)
    } else {
        verb.to_string()
    }
}

/// Strips a third-person `s` back off a verb.
///
/// `Goes` becomes `Go` and `Reads` becomes `Read`; blank and single-letter
/// inputs come back unchanged.
pub fn make_infinite_verb(verb: &str) -> String {
    let trimmed = verb.trim();
    if trimmed.chars().count() <= 1 {
        return verb.to_string();
    }
    if ends_with_any_ignore_case(trimmed, &["oes", "shes", "sses", "xes"]) {
        return trimmed[..trimmed.len() - 2].to_string();
    }
    if ends_with_ignore_case(trimmed, "s") {
        return trimmed[..trimmed.len() - 1].to_string();
    }
    verb.to_string()
}

/// Conjugates a verb into its third-person singular form.
pub fn make_third_person_singular_verb(verb: &str) -> String {
    let trimmed = verb.trim();
    if trimmed.is_empty() {
        return verb.to_string();
    }
    if ends_with_any_ignore_case(trimmed, &["oes", "shes"]) {
        return trimmed.to_string();
    }
    if ends_with_ignore_case(trimmed, "ss") {
        return format!("{trimmed}es");
    }
    if ends_with_ignore_case(trimmed, "s") {
        // A sibilant stem needs `es`; anything else already conjugates.
        if ends_with_any_ignore_case(trimmed, SIBILANT_ENDINGS) {
            return format!("{trimmed}es");
        }
        return trimmed.to_string();
    }
    if ends_with_any_ignore_case(trimmed, &["sh", "ch"])
        || ends_with_any_ignore_case(trimmed, &["o", "x", "z"])
    {
        return format!("{trimmed}es");
    }
    format!("{trimmed}s")
}

/// Returns true when the word looks like a conjugated third-person verb.
pub fn is_third_person_singular_verb(word: &str) -> bool {
    let trimmed = word.trim();
    trimmed.len() >= 2
        && ends_with_ignore_case(trimmed, "s")
        && !ends_with_any_ignore_case(trimmed, SIBILANT_ENDINGS)
}

/// Conjugates a verb into its gerund form.
///
/// A silent `e` is elided (`Take` becomes `Taking`, but `See` keeps both
/// letters), and a short stem ending in vowel-consonant doubles the final
/// consonant (`Run` becomes `Running`).
pub fn make_gerund_verb(verb: &str) -> String {
    let trimmed = verb.trim();
    if trimmed.is_empty() || ends_with_ignore_case(trimmed, "ing") {
        return verb.to_string();
    }
    if trimmed.len() >= 2
        && ends_with_ignore_case(trimmed, "e")
        && !ends_with_ignore_case(trimmed, "ee")
    {
        return format!("{}ing", &trimmed[..trimmed.len() - 1]);
    }
    if let Some(last) = trimmed.chars().last() {
        if doubles_final_consonant(trimmed) {
            return format!("{trimmed}{last}ing");
        }
    }
    format!("{trimmed}ing")
}

fn doubles_final_consonant(verb: &str) -> bool {
    if ends_with_any_ignore_case(verb, DOUBLING_STEMS) {
        return true;
    }
    let chars: Vec<char> = verb.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1].to_ascii_lowercase();
    if !DOUBLING_CONSONANTS.contains(&last) || !is_vowel(chars[n - 2]) {
        return false;
    }
    // A vowel pair (`sleep`, `clear`) keeps the single consonant.
    if n >= 3 && is_vowel(chars[n - 3]) {
        return false;
    }
    vowel_group_count(&chars) == 1
}

fn vowel_group_count(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &c in chars {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

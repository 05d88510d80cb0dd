use nomen::{
    is_third_person_singular_verb, make_gerund_verb, make_infinite_verb,
    make_third_person_singular_verb, try_make_verb,
};

#[test]
fn test_try_make_verb_configuration() {
    let verb = try_make_verb("Configuration");
    assert_eq!(verb, Some("Configure".to_string()));
}

#[test]
fn test_try_make_verb_common_nominalizations() {
    assert_eq!(try_make_verb("Installation"), Some("Install".to_string()));
    assert_eq!(try_make_verb("Comparison"), None, "No ending rule applies");
    assert_eq!(try_make_verb("Analysis"), Some("Analyze".to_string()));
    assert_eq!(try_make_verb("Validation"), Some("Validate".to_string()));
    assert_eq!(try_make_verb("Removal"), Some("Remove".to_string()));
    assert_eq!(try_make_verb("Retrieval"), Some("Retrieve".to_string()));
    assert_eq!(try_make_verb("Subscription"), Some("Subscribe".to_string()));
    assert_eq!(try_make_verb("Execution"), Some("Execute".to_string()));
}

#[test]
fn test_try_make_verb_whole_word_nominalizations() {
    assert_eq!(try_make_verb("decision"), Some("decide".to_string()));
    assert_eq!(try_make_verb("Decision"), Some("Decide".to_string()));
    assert_eq!(try_make_verb("usage"), Some("use".to_string()));
}

#[test]
fn test_try_make_verb_rejects_action_phrases() {
    let already_a_verb = try_make_verb("Action");
    assert_eq!(already_a_verb, None, "Action reads as an action already");

    let prefixed = try_make_verb("DoAction");
    assert_eq!(prefixed, None, "A Do prefix marks the name as a verb phrase");

    assert_eq!(try_make_verb("IsValid"), None);
    assert_eq!(try_make_verb("get_value"), None);
}

#[test]
fn test_try_make_verb_respects_word_boundaries() {
    assert_eq!(
        try_make_verb("Dot"),
        None,
        "Do must be followed by a new word, yet Dot has none and no rule fits"
    );
}

#[test]
fn test_try_make_verb_leaves_short_nouns_alone() {
    assert_eq!(try_make_verb("Mission"), None, "Nothing would remain of the stem");
    assert_eq!(try_make_verb("Vision"), None);
}

#[test]
fn test_try_make_verb_blank_input() {
    assert_eq!(try_make_verb(""), None);
    assert_eq!(try_make_verb("   "), None);
}

#[test]
fn test_make_infinite_verb_strips_conjugation() {
    assert_eq!(make_infinite_verb("Reads"), "Read");
    assert_eq!(make_infinite_verb("Goes"), "Go");
    assert_eq!(make_infinite_verb("Washes"), "Wash");
    assert_eq!(make_infinite_verb("Passes"), "Pass");
    assert_eq!(make_infinite_verb("Fixes"), "Fix");
}

#[test]
fn test_make_infinite_verb_leaves_short_input() {
    assert_eq!(make_infinite_verb("A"), "A");
    assert_eq!(make_infinite_verb(""), "");
    assert_eq!(make_infinite_verb("Read"), "Read", "Already infinite");
}

#[test]
fn test_make_third_person_singular_verb() {
    assert_eq!(make_third_person_singular_verb("Read"), "Reads");
    assert_eq!(make_third_person_singular_verb("Go"), "Goes");
    assert_eq!(make_third_person_singular_verb("Wash"), "Washes");
    assert_eq!(make_third_person_singular_verb("Watch"), "Watches");
    assert_eq!(make_third_person_singular_verb("Fix"), "Fixes");
    assert_eq!(make_third_person_singular_verb("Pass"), "Passes");
}

#[test]
fn test_make_third_person_singular_verb_is_idempotent() {
    assert_eq!(make_third_person_singular_verb("Reads"), "Reads");
    assert_eq!(make_third_person_singular_verb("Goes"), "Goes");
    assert_eq!(make_third_person_singular_verb("Washes"), "Washes");
}

#[test]
fn test_conjugation_round_trips() {
    for verb in ["Read", "Go", "Wash", "Fix", "Run", "Parse", "Pass"] {
        let conjugated = make_third_person_singular_verb(verb);
        let back = make_infinite_verb(&conjugated);
        assert_eq!(back, verb, "{verb} should survive the round trip");
    }
}

#[test]
fn test_is_third_person_singular_verb() {
    assert!(is_third_person_singular_verb("tests"));
    assert!(is_third_person_singular_verb("Reads"));
    assert!(is_third_person_singular_verb("parses"));
    assert!(!is_third_person_singular_verb("gas"), "A sibilant stem, not a verb");
    assert!(!is_third_person_singular_verb("basis"));
    assert!(!is_third_person_singular_verb("Run"));
    assert!(!is_third_person_singular_verb("s"), "Too short to be conjugated");
}

#[test]
fn test_make_gerund_verb() {
    assert_eq!(make_gerund_verb("Read"), "Reading");
    assert_eq!(make_gerund_verb("Take"), "Taking", "Silent e is elided");
    assert_eq!(make_gerund_verb("See"), "Seeing", "A double e survives");
    assert_eq!(make_gerund_verb("Run"), "Running", "Short stems double the consonant");
    assert_eq!(make_gerund_verb("Begin"), "Beginning");
    assert_eq!(make_gerund_verb("Commit"), "Committing");
    assert_eq!(make_gerund_verb("Format"), "Formatting");
    assert_eq!(make_gerund_verb("Sleep"), "Sleeping", "A vowel pair keeps one p");
    assert_eq!(make_gerund_verb("Clear"), "Clearing");
    assert_eq!(make_gerund_verb("Test"), "Testing");
}

#[test]
fn test_make_gerund_verb_passes_gerunds_through() {
    assert_eq!(make_gerund_verb("Parsing"), "Parsing");
    assert_eq!(make_gerund_verb("running"), "running");
}

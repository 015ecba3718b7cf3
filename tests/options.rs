use nfa_regex_rs::options::{DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_PATTERN_LEN, DEFAULT_MAX_STATES};
use nfa_regex_rs::syntax::SyntaxError;
use nfa_regex_rs::{Regex, RegexError, RegexOptions, RegexOptionsBuilder, RegexOptionsError};

#[test]
fn regex_options_when_default_constructed_then_uses_expected_values() {
    let options = RegexOptions::default();
    assert_eq!(options.max_pattern_len, DEFAULT_MAX_PATTERN_LEN);
    assert_eq!(options.max_states, DEFAULT_MAX_STATES);
    assert_eq!(options.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    assert!(options.validate().is_ok());
}

#[test]
fn regex_options_when_all_fields_customized_then_values_are_assigned() {
    let options = RegexOptionsBuilder::default()
        .max_pattern_len(128)
        .max_states(512)
        .max_nesting_depth(16)
        .build()
        .expect("options should build");

    assert_eq!(options.max_pattern_len, 128);
    assert_eq!(options.max_states, 512);
    assert_eq!(options.max_nesting_depth, 16);
}

#[test]
fn regex_options_when_pattern_len_zero_then_build_fails() {
    let err = RegexOptions::builder()
        .max_pattern_len(0)
        .build()
        .expect_err("zero pattern length should fail");
    assert_eq!(err, RegexOptionsError::MaxPatternLenInvalid { provided: 0 });
}

#[test]
fn regex_options_when_states_below_wrapper_size_then_build_fails() {
    let err = RegexOptions::builder()
        .max_states(1)
        .build()
        .expect_err("one state cannot hold start and terminal");
    assert_eq!(
        err,
        RegexOptionsError::MaxStatesInvalid {
            provided: 1,
            min: 2
        }
    );
}

#[test]
fn regex_options_when_exactly_wrapper_size_then_only_empty_pattern_fits() {
    let options = RegexOptions::builder()
        .max_states(4)
        .build()
        .expect("options should build");
    let empty = Regex::with_options("", &options).expect("empty pattern fits in four states");
    assert!(empty.is_match(""));
    assert!(Regex::with_options("ab", &options).is_err());
}

#[test]
fn regex_when_options_invalid_then_rejected_before_parsing() {
    let options = RegexOptions {
        max_pattern_len: 0,
        ..RegexOptions::default()
    };
    let err = Regex::with_options("a", &options).expect_err("invalid options");
    match err {
        RegexError::Options(RegexOptionsError::MaxPatternLenInvalid { provided }) => {
            assert_eq!(provided, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn regex_options_when_deserialized_from_partial_json_then_missing_fields_default() {
    let options: RegexOptions =
        serde_json::from_str(r#"{ "max_states": 4096 }"#).expect("json should deserialize");
    assert_eq!(options.max_states, 4096);
    assert_eq!(options.max_pattern_len, DEFAULT_MAX_PATTERN_LEN);
}

#[test]
fn regex_options_when_serialized_then_field_names_are_stable() {
    let value = serde_json::to_value(RegexOptions::default()).expect("options should serialize");
    assert_eq!(value["max_states"], DEFAULT_MAX_STATES);
    assert_eq!(value["max_pattern_len"], DEFAULT_MAX_PATTERN_LEN);
}

#[test]
fn regex_options_when_nesting_depth_zero_then_build_fails() {
    let err = RegexOptions::builder()
        .max_nesting_depth(0)
        .build()
        .expect_err("zero nesting depth should fail");
    assert_eq!(err, RegexOptionsError::MaxNestingDepthInvalid { provided: 0 });
}

#[test]
fn regex_when_nesting_depth_limited_then_syntax_error_surfaces() {
    let options = RegexOptions::builder()
        .max_nesting_depth(3)
        .build()
        .expect("options should build");

    let shallow = Regex::with_options("((a))", &options).expect("three levels fit");
    assert!(shallow.is_match("a"));

    let err = Regex::with_options("(((a)))", &options).expect_err("four levels do not fit");
    match err {
        RegexError::Syntax(SyntaxError::NestingTooDeep { index, limit, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(limit, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn regex_when_nesting_near_default_limit_then_compiles_and_matches() {
    // the innermost literal sits exactly at the limit
    let depth = DEFAULT_MAX_NESTING_DEPTH - 1;
    let pattern = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let re = Regex::new(&pattern).expect("pattern within the limit should compile");
    assert!(re.is_match("a"));
    assert!(!re.is_match("aa"));
}

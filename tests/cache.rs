use nfa_regex_rs::{RegexCache, RegexError, RegexOptions};
use std::sync::Arc;
use std::thread;

#[test]
fn cache_when_pattern_requested_twice_then_compiles_once() {
    let cache = RegexCache::new();
    let first = cache.get_or_compile("a(b|c)*").expect("pattern should compile");
    let second = cache.get_or_compile("a(b|c)*").expect("pattern should compile");

    assert!(Arc::ptr_eq(&first.shared_automaton(), &second.shared_automaton()));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains("a(b|c)*"));
    assert!(second.is_match("abcb"));
}

#[test]
fn cache_when_pattern_invalid_then_error_is_not_cached() {
    let cache = RegexCache::new();
    let err = cache.get_or_compile("a{1,2,3}").expect_err("pattern should fail");
    assert!(matches!(err, RegexError::Syntax(_)), "{err:?}");
    assert!(cache.is_empty());
    assert!(!cache.contains("a{1,2,3}"));
}

#[test]
fn cache_when_cleared_then_recompiles_on_next_request() {
    let cache = RegexCache::new();
    let before = cache.get_or_compile("x+").expect("pattern should compile");
    cache.clear();
    assert!(cache.is_empty());

    let after = cache.get_or_compile("x+").expect("pattern should compile");
    assert!(!Arc::ptr_eq(&before.shared_automaton(), &after.shared_automaton()));
}

#[test]
fn cache_when_configured_then_options_apply_to_every_entry() {
    let options = RegexOptions::builder()
        .max_states(16)
        .build()
        .expect("options should build");
    let cache = RegexCache::with_options(options.clone());
    assert_eq!(cache.options(), &options);

    cache.get_or_compile("ab").expect("small pattern fits");
    let err = cache.get_or_compile("a{20}").expect_err("pattern exceeds state limit");
    assert!(matches!(err, RegexError::Compile(_)), "{err:?}");
}

#[test]
fn cache_when_used_from_many_threads_then_single_entry_per_pattern() {
    let cache = RegexCache::new();
    let patterns = [("a*b", true), ("(ab)+", true), ("[a-c]{2}", true), ("a|b", false)];

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for (pattern, matches_ab) in patterns {
                    let re = cache.get_or_compile(pattern).expect("pattern should compile");
                    assert_eq!(re.is_match("ab"), matches_ab, "pattern {pattern}");
                }
            });
        }
    });

    assert_eq!(cache.len(), patterns.len());
    let re = cache.get_or_compile("(ab)+").expect("cached pattern");
    assert!(re.is_match("abab"));
    assert!(!re.is_match("aba"));
}

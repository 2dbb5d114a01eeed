use regex::{Regex, RegexBuilder};

/// Compiles a set of case-insensitive patterns
///
/// # Panics
///
/// Panics if a pattern is not a valid regex. Pattern sets in this crate
/// are constants, so a failure here is a programming error.
pub fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("Failed to compile regex")
        })
        .collect()
}

/// Returns true if any pattern matches somewhere in `text`
///
/// Empty text never matches.
pub fn matches_any(patterns: &[Regex], text: &str) -> bool {
    !text.is_empty() && patterns.iter().any(|re| re.is_match(text))
}

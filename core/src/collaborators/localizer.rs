use super::matching::{compile_patterns, matches_any};
use super::LocalizerDetector;
use regex::Regex;
use std::sync::OnceLock;

const LOCALIZER_PATTERNS: &[&str] = &[
    "localizer",
    "localiser",
    "survey",
    r"loc\.",
    r"\bscout\b",
    "3-plane",
    "^loc",
    "adjgre",
    "topogram",
    "scanogram",
    "surview",
];

/// Localizer detection by name
///
/// Matches the usual vendor names for planning scans. A label that
/// mentions a "plane" together with "loc" or "survey" also counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLocalizerDetector;

impl PatternLocalizerDetector {
    fn patterns() -> &'static [Regex] {
        static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
        PATTERNS.get_or_init(|| compile_patterns(LOCALIZER_PATTERNS))
    }

    fn is_multi_plane_localizer(text: &str) -> bool {
        let lower = text.to_lowercase();
        lower.contains("plane") && (lower.contains("loc") || lower.contains("survey"))
    }
}

impl LocalizerDetector for PatternLocalizerDetector {
    fn is_localizer(&self, text: &str) -> bool {
        matches_any(Self::patterns(), text) || Self::is_multi_plane_localizer(text)
    }
}

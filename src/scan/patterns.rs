/// Substrings that mark a line as worth a second look.
pub const SENSITIVE_PATTERNS: [&str; 3] = ["PASSWORD", "SECRET", "KEY"];

/// Upper-case substrings matched against the upper-cased form of a line.
#[derive(Debug, Clone, Copy)]
pub struct PatternSet {
    patterns: &'static [&'static str],
}

impl PatternSet {
    pub fn sensitive() -> Self {
        Self {
            patterns: &SENSITIVE_PATTERNS,
        }
    }

    /// Plain substring test, so `MONKEY` matches on `KEY`.
    pub fn matches(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        self.patterns.iter().any(|p| upper.contains(p))
    }

    pub fn patterns(&self) -> &'static [&'static str] {
        self.patterns
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::sensitive()
    }
}

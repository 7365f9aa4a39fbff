use std::collections::HashSet;
use tracing::debug;

/// Marker that excludes a dependency when it appears on its declaration line
pub const IGNORE_PATTERN: &str = "trustify-da-ignore";

/// Older spelling of [`IGNORE_PATTERN`], still honored
pub const LEGACY_IGNORE_PATTERN: &str = "exhortignore";

/// Returns true if the text carries either ignore marker.
pub fn contains_ignore_pattern(text: &str) -> bool {
    text.contains(IGNORE_PATTERN) || text.contains(LEGACY_IGNORE_PATTERN)
}

/// IgnoreDetector resolves ignore markers in manifest text to dependency names.
///
/// Only names the manifest actually declares can be excluded; the detector
/// matches each marked line against that list rather than trying to parse
/// the line itself. A line excludes a declared name when:
/// - it opens a table whose header ends in `.{name}]`
///   (`[dependencies.serde] # trustify-da-ignore`), or
/// - it starts with the name followed by whitespace, `=` or a quote, or with
///   the quoted name (`serde = "1.0" # trustify-da-ignore`).
#[derive(Debug, Clone, Default)]
pub struct IgnoreDetector {
    leading_keywords: Vec<String>,
}

impl IgnoreDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips a directive keyword (e.g. go.mod's `require`) from the start
    /// of a line before matching.
    pub fn with_leading_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.leading_keywords.push(keyword.into());
        self
    }

    /// Finds every declared name whose declaration line is marked.
    ///
    /// # Arguments
    /// * `content` - Raw manifest text
    /// * `declared` - Names declared in any dependency section
    ///
    /// # Returns
    /// The subset of `declared` to exclude
    pub fn find_ignored<'a, I>(&self, content: &str, declared: I) -> HashSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let declared: Vec<&String> = declared.into_iter().collect();
        let mut ignored = HashSet::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || !contains_ignore_pattern(trimmed) {
                continue;
            }
            let candidate = self.strip_keyword(trimmed);
            for name in &declared {
                if !ignored.contains(name.as_str()) && Self::line_declares(candidate, name) {
                    debug!(dependency = name.as_str(), "dependency marked as ignored");
                    ignored.insert((*name).clone());
                }
            }
        }

        ignored
    }

    fn strip_keyword<'l>(&self, line: &'l str) -> &'l str {
        for keyword in &self.leading_keywords {
            if let Some(rest) = line.strip_prefix(keyword.as_str()) {
                if rest.starts_with(char::is_whitespace) {
                    return rest.trim_start();
                }
            }
        }
        line
    }

    fn line_declares(line: &str, name: &str) -> bool {
        if line.starts_with('[') && line.contains(&format!(".{}]", name)) {
            return true;
        }

        if let Some(rest) = line.strip_prefix(name) {
            if rest.starts_with(|c: char| c.is_whitespace() || c == '=' || c == '"' || c == '\'') {
                return true;
            }
        }

        line.strip_prefix('"')
            .and_then(|rest| rest.strip_prefix(name))
            .is_some_and(|rest| rest.starts_with('"'))
    }
}

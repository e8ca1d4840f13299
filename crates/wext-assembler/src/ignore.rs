//! Ordered copy-ignore rules with gitignore-style negation.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{AssembleError, Result};

/// One compiled rule: the matcher plus whether it re-includes.
#[derive(Debug, Clone)]
struct Rule {
    matcher: GlobMatcher,
    negated: bool,
}

/// An ordered list of ignore globs for the copy stage.
///
/// Rules are evaluated in order and the last matching rule for a path wins,
/// so a later `!`-prefixed pattern re-includes paths an earlier pattern
/// excluded.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    rules: Vec<Rule>,
    patterns: Vec<String>,
}

impl IgnoreRules {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let (negated, glob) = match pattern.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, pattern.as_str()),
            };
            let matcher = GlobBuilder::new(glob)
                .literal_separator(true)
                .build()
                .map_err(|source| AssembleError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?
                .compile_matcher();
            rules.push(Rule { matcher, negated });
        }

        Ok(Self {
            rules,
            patterns: patterns.to_vec(),
        })
    }

    /// The raw pattern list, as handed to the copy stage descriptor.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `path` (relative to the copy root) is excluded from copying.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let mut ignored = false;
        for rule in &self.rules {
            if rule.matcher.is_match(path) {
                ignored = !rule.negated;
            }
        }
        ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wext_config::default_copy_ignore;

    fn rules(patterns: &[&str]) -> IgnoreRules {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        IgnoreRules::new(&patterns).unwrap()
    }

    #[test]
    fn later_negation_reincludes() {
        let rules = rules(&["**/*.json", "!_locales/**/*.json"]);
        assert!(rules.is_ignored("config.json"));
        assert!(!rules.is_ignored("_locales/en/messages.json"));
    }

    #[test]
    fn unmatched_paths_are_copied() {
        let rules = rules(&["**/*.js"]);
        assert!(!rules.is_ignored("icons/icon48.png"));
        assert!(rules.is_ignored("scripts/background.js"));
    }

    #[test]
    fn default_rules_cover_code_and_locales() {
        let defaults = default_copy_ignore();
        let rules = IgnoreRules::new(&defaults).unwrap();
        assert!(rules.is_ignored("background.js"));
        assert!(rules.is_ignored("manifest.json"));
        assert!(!rules.is_ignored("_locales/de/messages.json"));
        assert!(!rules.is_ignored("popup.html"));
    }

    #[test]
    fn rule_order_matters() {
        // negation first is overridden by the later broad exclude
        let rules = rules(&["!_locales/**/*.json", "**/*.json"]);
        assert!(rules.is_ignored("_locales/en/messages.json"));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        let patterns = vec!["[".to_string()];
        assert!(matches!(
            IgnoreRules::new(&patterns),
            Err(AssembleError::InvalidPattern { .. })
        ));
    }
}

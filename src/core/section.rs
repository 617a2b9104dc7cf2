// x2common - core/section.rs
//
// Debug section names and whole-word matching against the enable lists.

use crate::core::env::EnvSource;
use regex::{Regex, RegexBuilder};

/// Normalise a section name for registry lookup and output.
pub fn normalize(section: &str) -> String {
    section.to_uppercase()
}

/// Case-insensitive whole-word matcher for one section.
#[derive(Debug, Clone)]
pub struct SectionMatcher {
    regex: Option<Regex>,
}

impl SectionMatcher {
    /// Build a matcher for an already normalised section name.
    ///
    /// The name is matched literally; regex metacharacters in it carry no
    /// meaning. An empty name matches nothing.
    pub fn new(section: &str) -> Result<Self, regex::Error> {
        if section.is_empty() {
            return Ok(Self { regex: None });
        }
        let pattern = format!(r"\b{}\b", regex::escape(section));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { regex: Some(regex) })
    }

    /// True if the section appears as a whole word in `list`.
    pub fn is_match(&self, list: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(list))
    }

    /// True if the section appears in any of the named variables.
    /// Unset variables never match.
    pub fn is_enabled_in(&self, env: &dyn EnvSource, vars: &[&str]) -> bool {
        vars.iter()
            .filter_map(|name| env.var(name))
            .any(|list| self.is_match(&list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::MapEnv;

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("db"), "DB");
        assert_eq!(normalize("Http.Client"), "HTTP.CLIENT");
    }

    #[test]
    fn test_whole_word_match() {
        let m = SectionMatcher::new("DB").unwrap();
        assert!(m.is_match("DB"));
        assert!(m.is_match("http,db,fs"));
        assert!(m.is_match("http db"));
        assert!(!m.is_match("ADB"));
        assert!(!m.is_match("ADBX"));
        assert!(!m.is_match("DB_POOL"));
        assert!(!m.is_match(""));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(SectionMatcher::new("DB").unwrap().is_match("net,Db"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let m = SectionMatcher::new("A.B").unwrap();
        assert!(m.is_match("x,A.B"));
        assert!(!m.is_match("AXB"));
    }

    #[test]
    fn test_empty_section_never_matches() {
        assert!(!SectionMatcher::new("").unwrap().is_match("anything"));
    }

    #[test]
    fn test_enabled_in_any_variable() {
        let env = MapEnv::new().with_var("LEGACY", "fs,db");
        let m = SectionMatcher::new("DB").unwrap();
        assert!(m.is_enabled_in(&env, &["CURRENT", "LEGACY"]));
        assert!(!m.is_enabled_in(&env, &["CURRENT"]));
    }
}

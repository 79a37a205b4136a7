//! parameter matching
//!
//! Each field of a matcher [Parameter] is a regular expression that has to be found
//! somewhere in the candidate's field. Patterns are not anchored: `CONFIG_` matches
//! `CONFIG_foo` as well as `OLD_CONFIG_foo`.
use crate::diagnostic::{Diagnostic, Report};
use crate::model::Parameter;
use regex::Regex;

/// Compiled form of a matcher [Parameter]
#[derive(Debug, Clone)]
pub struct ParameterMatcher {
    name: Regex,
    config_file: Regex,
    value: Regex,
}

impl ParameterMatcher {
    /// Compiles all three patterns, failing on the first one that is invalid
    pub fn new(matcher: &Parameter) -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(&matcher.name)?,
            config_file: Regex::new(&matcher.config_file)?,
            value: Regex::new(&matcher.value)?,
        })
    }

    /// `true` when `candidate` fulfills all criteria
    ///
    /// With `ignore_value` only name and config file are compared. A candidate whose name
    /// and config file match but whose value does not is reported as
    /// [Diagnostic::ModifiedValue].
    pub fn matches(
        &self,
        candidate: &Parameter,
        ignore_value: bool,
        report: &mut impl Report,
    ) -> bool {
        if !self.name.is_match(&candidate.name)
            || !self.config_file.is_match(&candidate.config_file)
        {
            return false;
        }

        if ignore_value || self.value.is_match(&candidate.value) {
            return true;
        }

        report.report(Diagnostic::ModifiedValue {
            parameter: candidate.clone(),
        });
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params_match(
        matcher: &Parameter,
        candidate: &Parameter,
        ignore_value: bool,
        report: &mut impl Report,
    ) -> bool {
        ParameterMatcher::new(matcher)
            .expect("pattern must compile")
            .matches(candidate, ignore_value, report)
    }

    fn candidate() -> Parameter {
        Parameter::new("CONFIG_foo", "records.config", "1")
    }

    #[test]
    fn substring_match() {
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let matcher = Parameter::new("CONFIG_.*", "records", "1");
        assert!(params_match(&matcher, &candidate(), false, &mut diagnostics));
        assert!(params_match(
            &Parameter::new("foo", "config", ""),
            &candidate(),
            false,
            &mut diagnostics
        ));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn anchors_are_honored() {
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let matcher = Parameter::new("^foo$", "records.config", "1");
        assert!(!params_match(&matcher, &candidate(), false, &mut diagnostics));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn config_file_mismatch() {
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let matcher = Parameter::new("CONFIG_foo", "cache.config", "1");
        assert!(!params_match(&matcher, &candidate(), false, &mut diagnostics));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn modified_value_is_reported() {
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let matcher = Parameter::new("CONFIG_foo", "records.config", "^0$");
        assert!(!params_match(&matcher, &candidate(), false, &mut diagnostics));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::ModifiedValue {
                parameter: candidate()
            }]
        );
    }

    #[test]
    fn ignore_value() {
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let matcher = Parameter::new("CONFIG_foo", "records.config", "^0$");
        assert!(params_match(&matcher, &candidate(), true, &mut diagnostics));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn invalid_pattern() {
        for matcher in [
            Parameter::new("CONFIG_(", "records.config", "1"),
            Parameter::new("CONFIG_foo", "records.config", "[1"),
        ] {
            assert!(ParameterMatcher::new(&matcher).is_err());
        }
    }
}

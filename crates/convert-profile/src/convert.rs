//! conversion engine
//!
//! [convert] runs the whole pipeline on a loaded profile:
//! 1. [validate_parameters] checks the policy's preconditions
//! 2. [convert_parameters] applies the first matching rule to each parameter
//! 3. [rewrite_metadata] renames the profile
use crate::diagnostic::{Diagnostic, Report};
use crate::matcher::ParameterMatcher;
use crate::model::{ConversionPolicy, ConversionRule, Parameter, Profile};
use crate::rule::{apply, Applied};
use crate::validate::validate_parameters;

#[derive(derive_new::new, Debug, Default, Clone, Copy)]
pub struct ConvertOptions {
    /// Match rules on name and config file alone
    pub ignore_value: bool,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("Failed to validate required parameters in profile")]
    ValidationFailed,
}

pub fn convert(
    mut profile: Profile,
    policy: &ConversionPolicy,
    options: ConvertOptions,
    report: &mut impl Report,
) -> Result<Profile, ConvertError> {
    if !validate_parameters(&profile, &policy.validate_parameters, report) {
        return Err(ConvertError::ValidationFailed);
    }

    convert_parameters(
        &mut profile,
        &policy.conversion_rules,
        options.ignore_value,
        report,
    );
    rewrite_metadata(&mut profile, policy);

    Ok(profile)
}

/// Rule with its patterns compiled once per run
#[derive(Debug)]
pub struct CompiledRule<'r> {
    rule: &'r ConversionRule,
    /// `None` when a pattern did not compile
    matcher: Option<ParameterMatcher>,
}

impl<'r> CompiledRule<'r> {
    /// Compiles `rules` in order, reporting each rule with an invalid pattern
    pub fn compile_all(rules: &'r [ConversionRule], report: &mut impl Report) -> Vec<Self> {
        rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let matcher = match ParameterMatcher::new(&rule.match_parameter) {
                    Ok(matcher) => Some(matcher),
                    Err(error) => {
                        report.report(Diagnostic::InvalidPattern {
                            rule: index,
                            error: error.to_string(),
                        });
                        None
                    }
                };

                Self { rule, matcher }
            })
            .collect()
    }

    pub fn matches(
        &self,
        parameter: &Parameter,
        ignore_value: bool,
        report: &mut impl Report,
    ) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.matches(parameter, ignore_value, report))
    }
}

/// Replaces the profile's parameters by their converted form
///
/// Each parameter is transformed by the first rule (in policy order) that matches it, or
/// kept unchanged if no rule does. Deleted parameters are dropped; the order of the
/// remaining ones is preserved.
pub fn convert_parameters(
    profile: &mut Profile,
    rules: &[ConversionRule],
    ignore_value: bool,
    report: &mut impl Report,
) {
    let rules = CompiledRule::compile_all(rules, report);
    let parameters = std::mem::take(&mut profile.parameters);
    let mut converted = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let mut matched = None;
        for rule in &rules {
            if rule.matches(&parameter, ignore_value, report) {
                matched = Some(rule);
                break;
            }
        }

        let Some(rule) = matched else {
            converted.push(parameter);
            continue;
        };

        match apply(rule.rule, parameter, report) {
            Applied::Keep(updated) => converted.push(updated),
            Applied::Delete => {}
        }
    }

    tracing::debug!(parameters = converted.len(), "profile converted");
    profile.parameters = converted;
}

/// Literal replacement in the profile's name and description
pub fn rewrite_metadata(profile: &mut Profile, policy: &ConversionPolicy) {
    let description = &mut profile.description;
    description.name = policy.replace_name.apply(&description.name);
    description.description = policy.replace_description.apply(&description.description);
}

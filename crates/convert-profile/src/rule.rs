//! applying a matched [ConversionRule]
use crate::diagnostic::{Diagnostic, Report};
use crate::model::{Action, ConversionRule, Parameter};

/// Outcome of [apply]
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Keep(Parameter),
    Delete,
}

/// Applies `rule` to an already matched parameter
///
/// Every non-empty replacement field of the rule overwrites the parameter's field.
/// [Action::Delete] drops the parameter without touching any field; unknown actions are
/// reported and otherwise ignored.
pub fn apply(
    rule: &ConversionRule,
    mut parameter: Parameter,
    report: &mut impl Report,
) -> Applied {
    match &rule.action {
        Action::Delete => {
            report.report(Diagnostic::Deleted { parameter });
            return Applied::Delete;
        }
        Action::Unknown(action) => report.report(Diagnostic::UnknownAction {
            action: action.clone(),
        }),
        Action::None => {}
    }

    let before = parameter.clone();

    replace_unless_empty(&mut parameter.name, &rule.new_name);
    replace_unless_empty(&mut parameter.config_file, &rule.new_config_file);
    replace_unless_empty(&mut parameter.value, &rule.new_value);

    report.report(Diagnostic::Updated {
        before,
        after: parameter.clone(),
    });

    Applied::Keep(parameter)
}

fn replace_unless_empty(field: &mut String, replacement: &str) {
    if !replacement.is_empty() {
        *field = replacement.to_string();
    }
}

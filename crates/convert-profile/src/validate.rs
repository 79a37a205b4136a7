//! precondition checks on the input profile
use crate::diagnostic::{Diagnostic, Report};
use crate::model::{Parameter, Profile};

/// Checks that every required parameter exists in `profile` with exactly the given value
///
/// Name and config file are compared literally, not as patterns. Every profile entry with
/// the required identity must carry the expected value: the first divergent entry stops
/// validation. A required parameter without any entry fails as well.
pub fn validate_parameters(
    profile: &Profile,
    required: &[Parameter],
    report: &mut impl Report,
) -> bool {
    for expected in required {
        let mut found = false;

        for parameter in &profile.parameters {
            if !parameter.same_identity(expected) {
                continue;
            }

            found = true;
            if parameter.value != expected.value {
                report.report(Diagnostic::ValueMismatch {
                    parameter: parameter.name.clone(),
                    actual: parameter.value.clone(),
                    expected: expected.value.clone(),
                });
                return false;
            }
        }

        if !found {
            report.report(Diagnostic::MissingParameter {
                name: expected.name.clone(),
                config_file: expected.config_file.clone(),
            });
            return false;
        }
    }

    true
}

//! diagnostics emitted while converting
//!
//! None of these stop a conversion by themselves. Validation failures are also returned as
//! errors by [crate::convert::convert]; the diagnostic carries the detail.
use crate::model::Parameter;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Name and config file matched a rule but the value did not
    ModifiedValue { parameter: Parameter },
    /// A rule pattern failed to compile. The rule never matches.
    InvalidPattern { rule: usize, error: String },
    Deleted { parameter: Parameter },
    UnknownAction { action: String },
    Updated { before: Parameter, after: Parameter },
    ValueMismatch {
        parameter: String,
        actual: String,
        expected: String,
    },
    MissingParameter { name: String, config_file: String },
}

impl Diagnostic {
    /// Forward to [tracing] at the diagnostic's severity
    pub fn emit(&self) {
        match self {
            Diagnostic::ModifiedValue { parameter } => tracing::warn!(
                "[ACTION REQUIRED] Found modified value. Skip modifying {parameter}. Please update manually"
            ),
            Diagnostic::InvalidPattern { rule, error } => {
                tracing::warn!(rule, "Invalid pattern in conversion rule, rule skipped: {error}")
            }
            Diagnostic::Deleted { parameter } => tracing::info!("Deleting parameter {parameter}"),
            Diagnostic::UnknownAction { action } => {
                tracing::warn!("Unknown action {action}, skipping action")
            }
            Diagnostic::Updated { before, after } => {
                tracing::info!("Updating parameter {before} to {after}")
            }
            Diagnostic::ValueMismatch {
                parameter,
                actual,
                expected,
            } => tracing::error!(
                "Parameter {parameter} does not match value. Actual Value: {actual} Expected Value: {expected}"
            ),
            Diagnostic::MissingParameter { name, config_file } => {
                tracing::error!("Required parameter {name} ({config_file}) not found in profile")
            }
        }
    }
}

/// Sink for diagnostics
pub trait Report {
    fn report(&mut self, diagnostic: Diagnostic);
}

// blanket impl for FnMut
impl<F> Report for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

impl Report for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}

/// Reports through [tracing]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReport;

impl Report for TracingReport {
    fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut count = 0;
        let mut sink = |_: Diagnostic| count += 1;
        sink.report(Diagnostic::UnknownAction {
            action: "rename".to_string(),
        });
        sink.report(Diagnostic::UnknownAction {
            action: "move".to_string(),
        });
        assert_eq!(count, 2);
    }
}

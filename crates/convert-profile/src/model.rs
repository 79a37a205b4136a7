//! profile and conversion policy documents
//!
//! Field names follow the Traffic Ops export format. Missing or `null` fields are read as
//! empty strings/lists and unknown fields are ignored, so older exports load without complaint.
use serde::{Deserialize, Deserializer, Serialize};

/// A single configuration entry
///
/// Identity within a profile is `(name, config_file)`; the value is not part of it.
#[derive(derive_new::new, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Parameter {
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub config_file: String,
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub value: String,
}

impl Parameter {
    /// Same name and config file, value ignored
    pub fn same_identity(&self, other: &Parameter) -> bool {
        self.name == other.name && self.config_file == other.config_file
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"{{"{}", "{}", "{}"}}"#,
            self.name, self.config_file, self.value
        )
    }
}

/// A server role's configuration: parameters plus descriptive metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Profile {
    /// In document order
    #[serde(deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "profile", deserialize_with = "nullable")]
    pub description: ProfileDescription,
}

#[derive(derive_new::new, Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileDescription {
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[new(into)]
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// Rule document describing how to validate and transform a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionPolicy {
    /// Parameters that must be present with exactly this value
    #[serde(deserialize_with = "nullable")]
    pub validate_parameters: Vec<Parameter>,
    #[serde(deserialize_with = "nullable")]
    pub replace_name: ReplaceRule,
    #[serde(deserialize_with = "nullable")]
    pub replace_description: ReplaceRule,
    /// Tried in order, first match wins
    #[serde(rename = "conversion_actions", deserialize_with = "nullable")]
    pub conversion_rules: Vec<ConversionRule>,
}

/// Literal substring replacement
#[derive(derive_new::new, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReplaceRule {
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub old: String,
    #[new(into)]
    #[serde(deserialize_with = "nullable")]
    pub new: String,
}

impl ReplaceRule {
    /// Replaces every occurrence of `old` in `input`
    ///
    /// An empty `old` inserts `new` around every character, the same as [str::replace].
    pub fn apply(&self, input: &str) -> String {
        input.replace(&self.old, &self.new)
    }
}

/// One pattern matched transformation
///
/// The fields of `match_parameter` are regular expressions. Empty replacement fields leave
/// the corresponding field of a matched parameter unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversionRule {
    #[serde(deserialize_with = "nullable")]
    pub match_parameter: Parameter,
    #[serde(deserialize_with = "nullable")]
    pub new_name: String,
    #[serde(deserialize_with = "nullable")]
    pub new_config_file: String,
    #[serde(deserialize_with = "nullable")]
    pub new_value: String,
    #[serde(deserialize_with = "nullable")]
    pub action: Action,
}

impl ConversionRule {
    pub fn matching(match_parameter: Parameter) -> Self {
        Self {
            match_parameter,
            ..Default::default()
        }
    }

    pub fn with_new_name(mut self, new_name: impl Into<String>) -> Self {
        self.new_name = new_name.into();
        self
    }

    pub fn with_new_config_file(mut self, new_config_file: impl Into<String>) -> Self {
        self.new_config_file = new_config_file.into();
        self
    }

    pub fn with_new_value(mut self, new_value: impl Into<String>) -> Self {
        self.new_value = new_value.into();
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = action.into();
        self
    }
}

/// Non-replacement operation of a rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Action {
    /// No action given, only replace fields
    #[default]
    None,
    /// Drop the parameter from the profile
    Delete,
    /// Anything else. Reported and otherwise ignored.
    Unknown(String),
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Action::None,
            "delete" => Action::Delete,
            _ => Action::Unknown(value),
        }
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

/// `null` reads as the empty value, like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! reading and writing profile documents
//!
//! Input documents are JSON. The converted profile is rendered as JSON with a four space
//! indent and a trailing newline. Characters such as `<`, `>` and `&` are written as they
//! are, never escaped.
use crate::model::{ConversionPolicy, Profile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Profile,
    Policy,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Profile => f.write_str("input profile"),
            DocumentKind::Policy => f.write_str("conversion rules"),
        }
    }
}

pub fn load_profile(path: &Path) -> Result<Profile, LoadError> {
    load(path, DocumentKind::Profile)
}

pub fn load_policy(path: &Path) -> Result<ConversionPolicy, LoadError> {
    load(path, DocumentKind::Policy)
}

fn load<T: DeserializeOwned>(path: &Path, kind: DocumentKind) -> Result<T, LoadError> {
    tracing::debug!(path=%path.display(), %kind, "loading file");

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    parse(&contents, kind)
}

/// Parses a document that is already in memory
pub fn parse<T: DeserializeOwned>(contents: &str, kind: DocumentKind) -> Result<T, LoadError> {
    serde_json::from_str(contents).map_err(|source| LoadError::Json { kind, source })
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Cannot open input file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse {kind}")]
    Json {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON, indented by four spaces
pub fn render_json(profile: &Profile) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    profile.serialize(&mut serializer)?;
    buffer.push(b'\n');

    Ok(String::from_utf8(buffer)?)
}

pub fn render_yaml(profile: &Profile) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(profile)?)
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Unable to serialize profile as json")]
    Json(#[from] serde_json::Error),
    #[error("Unable to serialize profile as yaml")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Serialized profile is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Action, Parameter, ProfileDescription};
    use pretty_assertions::assert_eq;

    #[test]
    fn json_is_not_html_escaped() {
        let profile = Profile {
            parameters: vec![Parameter::new(
                "LogFormat.Format",
                "logs_xml.config",
                "<%<cqtq> %<ttms> & %<pssc>>",
            )],
            description: ProfileDescription::new("Edge", "EDGE", "ATS_PROFILE"),
        };

        let expected = r#"{
    "parameters": [
        {
            "name": "LogFormat.Format",
            "config_file": "logs_xml.config",
            "value": "<%<cqtq> %<ttms> & %<pssc>>"
        }
    ],
    "profile": {
        "description": "Edge",
        "name": "EDGE",
        "type": "ATS_PROFILE"
    }
}
"#;
        assert_eq!(render_json(&profile).unwrap(), expected);
    }

    #[test]
    fn empty_parameter_list() {
        let rendered = render_json(&Profile::default()).unwrap();
        assert!(rendered.starts_with("{\n    \"parameters\": [],\n"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let profile: Profile = parse(
            r#"{"parameters": [{"name": "a", "value": "1"}]}"#,
            DocumentKind::Profile,
        )
        .unwrap();

        assert_eq!(profile.parameters, vec![Parameter::new("a", "", "1")]);
        assert_eq!(profile.description, ProfileDescription::default());
    }

    #[test]
    fn null_fields_read_as_empty() {
        let profile: Profile = parse(
            r#"{"parameters": [{"name": "a", "config_file": "b", "value": null}], "profile": null}"#,
            DocumentKind::Profile,
        )
        .unwrap();
        assert_eq!(profile.parameters, vec![Parameter::new("a", "b", "")]);
        assert_eq!(profile.description, ProfileDescription::default());

        let profile: Profile = parse(r#"{"parameters": null}"#, DocumentKind::Profile).unwrap();
        assert!(profile.parameters.is_empty());

        let policy: ConversionPolicy = parse(
            r#"{
                "validate_parameters": null,
                "replace_name": {"old": null, "new": "ATS_7"},
                "conversion_actions": [
                    {"match_parameter": {"name": "a", "config_file": null, "value": null}, "new_value": null, "action": null}
                ]
            }"#,
            DocumentKind::Policy,
        )
        .unwrap();
        assert!(policy.validate_parameters.is_empty());
        assert_eq!(policy.replace_name.old, "");
        assert_eq!(policy.conversion_rules[0].action, Action::None);
        assert_eq!(policy.conversion_rules[0].new_value, "");
        assert_eq!(
            policy.conversion_rules[0].match_parameter,
            Parameter::new("a", "", "")
        );
    }

    #[test]
    fn parse_error_names_document() {
        let error = parse::<ConversionPolicy>("{", DocumentKind::Policy).unwrap_err();
        assert_eq!(error.to_string(), "Cannot parse conversion rules");
    }

    #[test]
    fn missing_file() {
        let error = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
    }
}

//! # convert-profile - rewrite cache server profiles
//!
//! Converts a Traffic Control cache server profile (Traffic Server mid/edge) from one
//! schema version to a newer one, driven by a declarative rule file.
//!
//! ## Introduction for developers
//!
//! ### Documents
//!
//! A **profile** is a list of parameters plus a description:
//!
//! ```json
//! {
//!     "parameters": [
//!         {"name": "CONFIG proxy.config.http.cache.http", "config_file": "records.config", "value": "INT 1"}
//!     ],
//!     "profile": {"description": "Edge Cache", "name": "EDGE_ATS_6", "type": "ATS_PROFILE"}
//! }
//! ```
//!
//! A parameter is identified by its `name` and `config_file`; the value is not part of its
//! identity.
//!
//! A **policy** ([model::ConversionPolicy]) describes
//! - `validate_parameters`: parameters that must exist in the profile with exactly the given
//!   value before anything is changed
//! - `replace_name` / `replace_description`: literal `old` -> `new` replacement applied to the
//!   profile's name and description
//! - `conversion_actions`: an ordered list of rules
//!
//! ### Rules
//!
//! A rule ([model::ConversionRule]) has a `match_parameter` whose fields are regular
//! expressions (unanchored), optional `new_name`, `new_config_file` and `new_value`
//! replacements, and an optional `action`. The only known action is `delete`.
//!
//! | parameter                          | rule                                                  | result                               |
//! |------------------------------------|-------------------------------------------------------|--------------------------------------|
//! | `CONFIG_foo`, `records.config`, `1` | match `CONFIG_.*`, `records.config`, `1`; `new_name = NEW_foo` | `NEW_foo`, `records.config`, `1` |
//! | `CONFIG_foo`, `records.config`, `1` | match `CONFIG_.*`, `records.config`, `1`; `action = delete`    | removed                          |
//! | `CONFIG_foo`, `records.config`, `5` | match `CONFIG_.*`, `records.config`, `1`                       | unchanged, reported              |
//!
//! ### Conversion
//!
//! see [convert::convert]
//!
//! For each parameter the rules are tried in order and only the first match is applied.
//! Parameters without a matching rule are kept as they are, in their original position.
//! A parameter whose name and config file match a rule but whose value does not has
//! probably been tuned by an operator; it is left alone and reported so it can be updated
//! manually. `ignore_value` (`--force` on the command line) skips the value comparison.
//!
//! ### Diagnostics
//!
//! The engine never logs directly. Every function takes a [diagnostic::Report] sink;
//! [diagnostic::TracingReport] forwards to [tracing], tests collect into a `Vec`.
//!
pub mod convert;
pub mod diagnostic;
pub mod document;
pub mod matcher;
pub mod model;
pub mod rule;
pub mod validate;

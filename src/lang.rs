//! Player-facing message templates.

use serde::{Deserialize, Serialize};

/// Supplies the localized text for parameter errors that are not fixed-format.
pub trait Messages: Send + Sync {
    /// Message for a token that is not a `key:value` pair.
    fn malformed_pair(&self, token: &str) -> String;

    /// Message for a key the parser does not recognize.
    fn unknown_parameter(&self, name: &str) -> String;
}

/// Message templates, loadable from TOML.
///
/// `[name]` in `unknown_parameter` is replaced with the offending key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lang {
    pub malformed_pair: String,
    pub unknown_parameter: String,
}

impl Default for Lang {
    fn default() -> Self {
        Self {
            malformed_pair: "Parameters must be given as key:value".into(),
            unknown_parameter: "Parameter [name] does not exist".into(),
        }
    }
}

impl Messages for Lang {
    fn malformed_pair(&self, _token: &str) -> String {
        self.malformed_pair.clone()
    }

    fn unknown_parameter(&self, name: &str) -> String {
        self.unknown_parameter.replace("[name]", name)
    }
}

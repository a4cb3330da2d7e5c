//! Resolver settings, deserialized from the host's config object.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid resolver config: {0}")]
    Invalid(String),
    #[error("resolver config field `{0}` must not be empty")]
    Empty(&'static str),
}

/// How a collapsed selection (`start == end`) is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapsedPolicy {
    /// A caret without selected text is reported as `null`.
    #[default]
    Suppress,
    /// A caret is reported as `{start, end}` with equal offsets.
    Report,
}

/// Resolver settings.
///
/// Every field has a default matching the text-annotator layout: `<textarea>`
/// candidates whose `id` attribute holds a serialized `{"id": ..}` token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Tag name of candidate elements.
    pub candidate_tag: String,
    /// Attribute holding each candidate's identifier.
    pub id_attribute: String,
    /// Field extracted from structured tokens.
    pub token_field: String,
    pub collapsed: CollapsedPolicy,
    /// Namespace under which the host looks the resolver up.
    pub namespace: String,
    /// Function name inside `namespace`.
    pub function_name: String,
    /// Max level for the console logger (`"off"`, `"error"`, ... `"trace"`).
    pub log_level: log::LevelFilter,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            candidate_tag: "textarea".to_string(),
            id_attribute: "id".to_string(),
            token_field: "id".to_string(),
            collapsed: CollapsedPolicy::default(),
            namespace: "clientside".to_string(),
            function_name: "handleTextSelection".to_string(),
            log_level: log::LevelFilter::Warn,
        }
    }
}

impl ResolverConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(src).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        config.validate()
    }

    /// Reject configs that could never match anything.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let required = [
            ("candidateTag", &self.candidate_tag),
            ("idAttribute", &self.id_attribute),
            ("tokenField", &self.token_field),
            ("namespace", &self.namespace),
            ("functionName", &self.function_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }
        Ok(self)
    }
}

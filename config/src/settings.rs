use aigate_types::AiServiceSettings;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed AI service settings: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    #[error("AI service settings must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Parse the raw settings blob stored with an AI service configuration.
///
/// An empty blob or a JSON `null` yields empty settings. Whitespace alone is
/// malformed. Anything else must be a JSON object; unknown keys are ignored
/// and `null` fields count as absent.
pub fn parse_service_settings(raw: &str) -> Result<AiServiceSettings, SettingsError> {
    if raw.is_empty() {
        return Ok(AiServiceSettings::default());
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|source| SettingsError::Malformed { source })?;
    match value {
        Value::Null => Ok(AiServiceSettings::default()),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|source| SettingsError::Malformed { source })
        }
        other => Err(SettingsError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

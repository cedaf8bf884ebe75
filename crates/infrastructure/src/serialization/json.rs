//! JSON settings loading.

use std::fs;
use std::io;
use std::path::Path;

use dispatchgen_domain::GeneratorSettings;
use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

/// Loads generator settings from a JSON file.
///
/// Fields absent from the file keep their Vulkan defaults. The result is not
/// validated here; the model build rejects empty identifiers.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a settings object.
pub fn load_settings(path: &Path) -> Result<GeneratorSettings, SerializationError> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: GeneratorSettings =
            from_json(r#"{ "table_name": "VkTable", "command_prefix_len": 3 }"#).unwrap();

        assert_eq!(settings.table_name, "VkTable");
        assert_eq!(settings.command_prefix_len, 3);
        assert_eq!(settings.device_handle, "VkDevice");
        assert_eq!(settings.api, "vulkan");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = GeneratorSettings::default().with_api("vulkansc");
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("\"api\": \"vulkansc\""));

        let parsed: GeneratorSettings = from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "instance_overrides": ["vkCreateInstance"] }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.instance_overrides, vec!["vkCreateInstance".to_string()]);
    }

    #[test]
    fn test_load_settings_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(load_settings(&missing), Err(SerializationError::Io(_))));

        let invalid = temp_dir.path().join("invalid.json");
        fs::write(&invalid, r#"{ "table_name": 42 }"#).unwrap();
        assert!(matches!(
            load_settings(&invalid),
            Err(SerializationError::Deserialize(_))
        ));
    }
}

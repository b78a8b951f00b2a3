use crate::core::system_intent::ExpectedIntent;
use crate::utils::error::{PayloadError, Result};
use crate::utils::validation::{validate_intent_name, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied by [`GoogleData`](crate::core::google_data::GoogleData).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadSettings {
    /// Value of `isSsml`; API.AI formats the speech as SSML when set.
    pub is_ssml: bool,
    /// `expectUserResponse` before any simple response is recorded.
    pub expect_user_response: bool,
    /// Expected intent requested by a simple response.
    pub default_intent: String,
}

impl Default for PayloadSettings {
    fn default() -> Self {
        Self {
            is_ssml: true,
            expect_user_response: true,
            default_intent: ExpectedIntent::Text.name().to_string(),
        }
    }
}

impl PayloadSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PayloadError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 取得預設的 expected intent，無法解析時退回 TEXT
    pub fn default_expected_intent(&self) -> ExpectedIntent {
        match self.default_intent.parse() {
            Ok(intent) => intent,
            Err(e) => {
                tracing::warn!("Falling back to TEXT intent: {}", e);
                ExpectedIntent::Text
            }
        }
    }
}

impl Validate for PayloadSettings {
    fn validate(&self) -> Result<()> {
        validate_intent_name("settings.default_intent", &self.default_intent)?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${SITE_URL})，未設定的變數保持原樣
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PayloadError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_table_is_empty() {
        let settings = PayloadSettings::from_toml_str("").unwrap();
        assert_eq!(settings, PayloadSettings::default());
        assert!(settings.is_ssml);
        assert!(settings.expect_user_response);
        assert_eq!(settings.default_expected_intent(), ExpectedIntent::Text);
    }

    #[test]
    fn test_parse_settings() {
        let settings = PayloadSettings::from_toml_str(
            r#"
is_ssml = false
expect_user_response = false
default_intent = "confirmation"
"#,
        )
        .unwrap();

        assert!(!settings.is_ssml);
        assert!(!settings.expect_user_response);
        assert_eq!(
            settings.default_expected_intent(),
            ExpectedIntent::Confirmation
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ASSISTANT_PAYLOAD_TEST_INTENT", "OPTION");

        let settings =
            PayloadSettings::from_toml_str(r#"default_intent = "${ASSISTANT_PAYLOAD_TEST_INTENT}""#)
                .unwrap();
        assert_eq!(settings.default_expected_intent(), ExpectedIntent::Option);

        std::env::remove_var("ASSISTANT_PAYLOAD_TEST_INTENT");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let out = substitute_env_vars("url = \"${ASSISTANT_PAYLOAD_UNSET_VAR}\"").unwrap();
        assert_eq!(out, "url = \"${ASSISTANT_PAYLOAD_UNSET_VAR}\"");
    }

    #[test]
    fn test_invalid_default_intent_fails_validation() {
        let settings = PayloadSettings::from_toml_str(r#"default_intent = "   ""#).unwrap();
        assert!(settings.validate().is_err());
        assert_eq!(settings.default_expected_intent(), ExpectedIntent::Text);
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = PayloadSettings::from_toml_str("is_ssml = ").unwrap_err();
        assert!(matches!(err, PayloadError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"is_ssml = false\n").unwrap();

        let settings = PayloadSettings::from_file(temp_file.path()).unwrap();
        assert!(!settings.is_ssml);
        assert!(settings.expect_user_response);
    }
}

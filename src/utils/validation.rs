use crate::core::system_intent::ExpectedIntent;
use crate::utils::error::{PayloadError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PayloadError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PayloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查 intent 名稱是否可解析 (例如 `TEXT` 或 `actions.intent.OPTION`)
pub fn validate_intent_name(field_name: &str, value: &str) -> Result<ExpectedIntent> {
    validate_non_empty_string(field_name, value)?;

    let intent: ExpectedIntent = value.parse()?;
    if let ExpectedIntent::Other(name) = &intent {
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(PayloadError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Intent names may only contain letters, digits and underscores"
                    .to_string(),
            });
        }
    }
    Ok(intent)
}

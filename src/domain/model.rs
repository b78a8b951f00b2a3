use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OPTION_VALUE_SPEC_TYPE: &str = "type.googleapis.com/google.actions.v2.OptionValueSpec";

/// The `data.google` object of an API.AI webhook response.
///
/// Every key is always emitted. `finalResponse` and `noInputPrompts` are
/// placeholders the platform expects to find, and `systemIntent` is `{}` until
/// an expected intent has been requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayload {
    pub speech: String,
    pub expect_user_response: bool,
    pub is_ssml: bool,
    pub final_response: Map<String, Value>,
    pub no_input_prompts: Vec<Value>,
    pub rich_response: RichResponsePayload,
    #[serde(default, with = "empty_object")]
    pub system_intent: Option<SystemIntentPayload>,
}

impl GooglePayload {
    /// 包成 webhook `data` 欄位: `{"google": {...}}`
    pub fn into_data_field(self) -> Result<Value> {
        let mut data = Map::new();
        data.insert("google".to_string(), serde_json::to_value(self)?);
        Ok(Value::Object(data))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichResponsePayload {
    pub items: Vec<ResponseItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_out_suggestion: Option<LinkOutSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub simple_response: SimpleResponse,
}

/// Speech plus the text shown on screen.
///
/// There is no `ssml` field here: API.AI derives it from the payload's
/// `isSsml` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
    pub display_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutSuggestion {
    pub destination_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemIntentPayload {
    pub intent: String,
    #[serde(default, with = "empty_object")]
    pub input_value_data: Option<OptionValueSpec>,
}

/// Selector data attached to an `actions.intent.OPTION` request.
///
/// Only one of the three selectors may be present at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValueSpec {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_select: Option<SelectItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_select: Option<ListSelect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carousel_select: Option<SelectItems>,
}

impl Default for OptionValueSpec {
    fn default() -> Self {
        Self {
            type_url: OPTION_VALUE_SPEC_TYPE.to_string(),
            simple_select: None,
            list_select: None,
            carousel_select: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectItems {
    pub items: Vec<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListSelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<OptionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    pub option_info: OptionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionInfo {
    pub key: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub accessibility_text: String,
}

impl Image {
    pub fn new(url: impl Into<String>, accessibility_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            accessibility_text: accessibility_text.into(),
        }
    }
}

/// `None` 序列化為 `{}`，反序列化時 `{}` 或 `null` 還原成 `None`
mod empty_object {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
        }
    }
}

use crate::config::settings::{substitute_env_vars, PayloadSettings};
use crate::core::google_data::GoogleData;
use crate::core::option_value::{build_list_item, build_option_item};
use crate::core::system_intent::{ExpectedIntent, SystemIntent};
use crate::core::LoadData;
use crate::domain::model::{GooglePayload, Image, OptionItem, OptionValueSpec};
use crate::utils::error::{PayloadError, Result};
use crate::utils::validation::{
    validate_intent_name, validate_non_empty_string, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A TOML description of builder calls, replayed in order by [`ResponseScript::render`].
///
/// ```toml
/// name = "greeting"
///
/// [settings]
/// is_ssml = true
///
/// [[steps]]
/// kind = "simple_response"
/// speech = "Hi! What would you like to do?"
/// display_text = "Hi!"
///
/// [[steps]]
/// kind = "suggestion"
/// title = "Help"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseScript {
    pub name: Option<String>,
    pub description: Option<String>,
    pub settings: Option<PayloadSettings>,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptStep {
    SimpleResponse {
        speech: String,
        display_text: String,
        expect_response: Option<bool>,
    },
    Suggestion {
        title: String,
    },
    LinkOut {
        destination: String,
        url: String,
    },
    ExpectIntent {
        intent: String,
        selector: Option<SelectorKind>,
        title: Option<String>,
        #[serde(default)]
        items: Vec<ScriptOptionItem>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    Simple,
    List,
    Carousel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptOptionItem {
    pub key: String,
    pub title: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

impl ResponseScript {
    /// 從 TOML 檔案載入腳本
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析腳本 (支援 ${VAR} 環境變數)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PayloadError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Replays every step through a fresh [`GoogleData`] and returns the final payload.
    pub fn render(&self) -> Result<GooglePayload> {
        let settings = self.settings.clone().unwrap_or_default();
        let mut data = GoogleData::with_settings(settings);

        tracing::info!(
            "Rendering script '{}' with {} steps",
            self.display_name(),
            self.steps.len()
        );

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", index, step);
            match step {
                ScriptStep::SimpleResponse {
                    speech,
                    display_text,
                    expect_response,
                } => {
                    let expect = expect_response.unwrap_or(data.settings().expect_user_response);
                    data.simple_response(speech.as_str(), display_text.as_str(), expect);
                }
                ScriptStep::Suggestion { title } => {
                    data.suggestion(title.as_str());
                }
                ScriptStep::LinkOut { destination, url } => {
                    data.link_out(destination.as_str(), url.as_str())?;
                }
                ScriptStep::ExpectIntent {
                    intent,
                    selector,
                    title,
                    items,
                } => {
                    let system_intent = build_system_intent(intent, *selector, title, items)?;
                    data.expect_intent(system_intent);
                }
            }
        }

        Ok(data.load_data())
    }
}

fn build_system_intent(
    intent: &str,
    selector: Option<SelectorKind>,
    title: &Option<String>,
    items: &[ScriptOptionItem],
) -> Result<SystemIntent> {
    let expected: ExpectedIntent = intent.parse()?;
    let system_intent = SystemIntent::new(expected);

    let Some(kind) = selector else {
        return Ok(system_intent);
    };

    let option_items = items
        .iter()
        .map(|item| item.to_option_item(kind))
        .collect::<Result<Vec<_>>>()?;

    let mut spec = OptionValueSpec::default();
    match kind {
        SelectorKind::Simple => spec.add_simple_select(option_items),
        SelectorKind::List => spec.add_list_select(title.clone(), option_items),
        SelectorKind::Carousel => spec.add_carousel_select(option_items),
    };

    Ok(system_intent.with_option_spec(spec))
}

impl ScriptOptionItem {
    fn to_option_item(&self, kind: SelectorKind) -> Result<OptionItem> {
        let image = match (&self.image_url, &self.image_alt) {
            (None, None) => None,
            (url, alt) => {
                let url = validate_required_field("image_url", url)?;
                let alt = validate_required_field("image_alt", alt)?;
                Some(Image::new(url.as_str(), alt.as_str()))
            }
        };

        match kind {
            SelectorKind::Simple => Ok(build_option_item(
                self.key.as_str(),
                Some(self.synonyms.clone()),
                self.title.clone(),
            )),
            SelectorKind::List | SelectorKind::Carousel => {
                let title = validate_required_field("title", &self.title)?;
                Ok(build_list_item(
                    self.key.as_str(),
                    title.as_str(),
                    self.synonyms.clone(),
                    self.description.clone(),
                    image,
                ))
            }
        }
    }
}

impl Validate for ResponseScript {
    fn validate(&self) -> Result<()> {
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }

        let mut link_outs = 0;
        for (index, step) in self.steps.iter().enumerate() {
            let field = |name: &str| format!("steps[{}].{}", index, name);
            match step {
                ScriptStep::SimpleResponse { .. } => {}
                ScriptStep::Suggestion { title } => {
                    validate_non_empty_string(&field("title"), title)?;
                }
                ScriptStep::LinkOut { destination, url } => {
                    validate_non_empty_string(&field("destination"), destination)?;
                    validate_non_empty_string(&field("url"), url)?;
                    link_outs += 1;
                    if link_outs > 1 {
                        return Err(PayloadError::InvalidConfigValueError {
                            field: field("kind"),
                            value: "link_out".to_string(),
                            reason: "Only one link_out step may be given".to_string(),
                        });
                    }
                }
                ScriptStep::ExpectIntent {
                    intent,
                    selector,
                    title,
                    items,
                } => {
                    let expected = validate_intent_name(&field("intent"), intent)?;
                    if selector.is_some() && expected != ExpectedIntent::Option {
                        return Err(PayloadError::InvalidConfigValueError {
                            field: field("selector"),
                            value: intent.clone(),
                            reason: "Selectors are only valid for the OPTION intent".to_string(),
                        });
                    }
                    if selector.is_none() && !items.is_empty() {
                        return Err(PayloadError::InvalidConfigValueError {
                            field: field("items"),
                            value: format!("{} items", items.len()),
                            reason: "Option items need a selector (simple, list or carousel)"
                                .to_string(),
                        });
                    }
                    if title.is_some() && *selector != Some(SelectorKind::List) {
                        return Err(PayloadError::InvalidConfigValueError {
                            field: field("title"),
                            value: title.clone().unwrap_or_default(),
                            reason: "A selector title is only used by the list selector"
                                .to_string(),
                        });
                    }
                    for (item_index, item) in items.iter().enumerate() {
                        let item_field = |name: &str| field(&format!("items[{}].{}", item_index, name));
                        validate_non_empty_string(&item_field("key"), &item.key)?;

                        if *selector == Some(SelectorKind::Simple) {
                            // simple select 的項目沒有 description / image
                            let unused = [
                                ("description", item.description.as_ref()),
                                ("image_url", item.image_url.as_ref()),
                                ("image_alt", item.image_alt.as_ref()),
                            ];
                            if let Some((name, value)) =
                                unused.iter().find_map(|(name, value)| value.map(|v| (*name, v)))
                            {
                                return Err(PayloadError::InvalidConfigValueError {
                                    field: item_field(name),
                                    value: value.clone(),
                                    reason: "Simple select items carry no description or image"
                                        .to_string(),
                                });
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

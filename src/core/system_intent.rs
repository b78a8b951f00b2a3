use crate::core::LoadData;
use crate::domain::model::{OptionValueSpec, SystemIntentPayload};
use crate::utils::error::PayloadError;
use std::fmt;
use std::str::FromStr;

pub const INTENT_PREFIX: &str = "actions.intent.";

/// Kind of user input the assistant should collect next.
///
/// See https://developers.google.com/actions/components/intents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpectedIntent {
    /// Raw user input
    Text,
    Option,
    Confirmation,
    TransactionRequirementsCheck,
    DeliveryAddress,
    TransactionDecision,
    Other(String),
}

impl ExpectedIntent {
    pub fn name(&self) -> &str {
        match self {
            ExpectedIntent::Text => "TEXT",
            ExpectedIntent::Option => "OPTION",
            ExpectedIntent::Confirmation => "CONFIRMATION",
            ExpectedIntent::TransactionRequirementsCheck => "TRANSACTION_REQUIREMENTS_CHECK",
            ExpectedIntent::DeliveryAddress => "DELIVERY_ADDRESS",
            ExpectedIntent::TransactionDecision => "TRANSACTION_DECISION",
            ExpectedIntent::Other(name) => name,
        }
    }

    /// Fully qualified name, e.g. `actions.intent.TEXT`.
    pub fn qualified_name(&self) -> String {
        format!("{}{}", INTENT_PREFIX, self)
    }

    /// Maps a hand-built `Other` onto a known variant when it names one and
    /// upper-cases anything left.
    pub fn normalized(self) -> Self {
        match self {
            ExpectedIntent::Other(name) => name.parse().unwrap_or(ExpectedIntent::Other(name)),
            known => known,
        }
    }
}

impl fmt::Display for ExpectedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedIntent::Other(name) => f.write_str(&name.to_ascii_uppercase()),
            known => f.write_str(known.name()),
        }
    }
}

impl FromStr for ExpectedIntent {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // 接受 `text` 或 `actions.intent.TEXT` 兩種寫法
        let bare = match trimmed.get(..INTENT_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(INTENT_PREFIX) => {
                &trimmed[INTENT_PREFIX.len()..]
            }
            _ => trimmed,
        };

        if bare.is_empty() {
            return Err(PayloadError::InvalidConfigValueError {
                field: "intent".to_string(),
                value: s.to_string(),
                reason: "Intent name cannot be empty".to_string(),
            });
        }

        let upper = bare.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "TEXT" => ExpectedIntent::Text,
            "OPTION" => ExpectedIntent::Option,
            "CONFIRMATION" => ExpectedIntent::Confirmation,
            "TRANSACTION_REQUIREMENTS_CHECK" => ExpectedIntent::TransactionRequirementsCheck,
            "DELIVERY_ADDRESS" => ExpectedIntent::DeliveryAddress,
            "TRANSACTION_DECISION" => ExpectedIntent::TransactionDecision,
            _ => ExpectedIntent::Other(upper),
        })
    }
}

/// An expected intent together with its input value data.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemIntent {
    intent: ExpectedIntent,
    input_value_data: Option<OptionValueSpec>,
}

impl SystemIntent {
    pub fn new(intent: ExpectedIntent) -> Self {
        let intent = intent.normalized();
        let input_value_data = match intent {
            ExpectedIntent::Option => Some(OptionValueSpec::default()),
            _ => None,
        };
        Self {
            intent,
            input_value_data,
        }
    }

    pub fn text() -> Self {
        Self::new(ExpectedIntent::Text)
    }

    pub fn with_option_spec(mut self, spec: OptionValueSpec) -> Self {
        if self.intent != ExpectedIntent::Option {
            tracing::warn!(
                "Attaching option value spec to non-OPTION intent {}",
                self.intent
            );
        }
        self.input_value_data = Some(spec);
        self
    }

    pub fn intent(&self) -> &ExpectedIntent {
        &self.intent
    }

    pub fn option_spec(&self) -> Option<&OptionValueSpec> {
        self.input_value_data.as_ref()
    }
}

impl Default for SystemIntent {
    fn default() -> Self {
        Self::text()
    }
}

impl LoadData for SystemIntent {
    type Payload = SystemIntentPayload;

    fn load_data(&self) -> SystemIntentPayload {
        SystemIntentPayload {
            intent: self.intent.qualified_name(),
            input_value_data: self.input_value_data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OPTION_VALUE_SPEC_TYPE;
    use serde_json::json;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("text".parse::<ExpectedIntent>().unwrap(), ExpectedIntent::Text);
        assert_eq!(
            "Delivery_Address".parse::<ExpectedIntent>().unwrap(),
            ExpectedIntent::DeliveryAddress
        );
        assert_eq!(
            "actions.intent.CONFIRMATION".parse::<ExpectedIntent>().unwrap(),
            ExpectedIntent::Confirmation
        );
        assert_eq!(
            "datetime".parse::<ExpectedIntent>().unwrap(),
            ExpectedIntent::Other("DATETIME".to_string())
        );
        assert!("".parse::<ExpectedIntent>().is_err());
        assert!("actions.intent.".parse::<ExpectedIntent>().is_err());
    }

    #[test]
    fn test_text_intent_has_empty_input_value_data() {
        let value = SystemIntent::text().to_value().unwrap();
        assert_eq!(
            value,
            json!({ "intent": "actions.intent.TEXT", "inputValueData": {} })
        );
    }

    #[test]
    fn test_option_intent_attaches_option_value_spec() {
        let value = SystemIntent::new(ExpectedIntent::Option).to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "intent": "actions.intent.OPTION",
                "inputValueData": { "@type": OPTION_VALUE_SPEC_TYPE }
            })
        );
    }

    #[test]
    fn test_other_intent_keeps_its_name() {
        let intent = SystemIntent::new(ExpectedIntent::Other("PERMISSION".to_string()));
        assert_eq!(intent.load_data().intent, "actions.intent.PERMISSION");
        assert!(intent.option_spec().is_none());
    }

    #[test]
    fn test_hand_built_other_intent_is_upper_cased() {
        let intent = SystemIntent::new(ExpectedIntent::Other("permission".to_string()));
        assert_eq!(intent.load_data().intent, "actions.intent.PERMISSION");
        assert_eq!(intent.intent().to_string(), "PERMISSION");
        assert_eq!(
            ExpectedIntent::Other("sign_in".to_string()).to_string(),
            "SIGN_IN"
        );
    }

    #[test]
    fn test_hand_built_option_name_gets_option_value_spec() {
        let intent = SystemIntent::new(ExpectedIntent::Other("option".to_string()));
        assert_eq!(intent.intent(), &ExpectedIntent::Option);
        assert_eq!(intent.load_data().intent, "actions.intent.OPTION");
        assert!(intent.load_data().input_value_data.is_some());
    }
}

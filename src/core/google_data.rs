use crate::config::settings::PayloadSettings;
use crate::core::rich_response::RichResponse;
use crate::core::system_intent::SystemIntent;
use crate::core::LoadData;
use crate::domain::model::GooglePayload;
use crate::utils::error::Result;
use serde_json::Map;

/// Builds the `data.google` object of an API.AI webhook response.
///
/// It is not rendered as a response by itself; it extends the webhook
/// response with what Actions on Google needs. API.AI forwards it to the
/// client untouched.
///
/// Each accumulating call returns the projection of the current state, and
/// [`LoadData::load_data`] produces it on demand.
#[derive(Debug, Clone)]
pub struct GoogleData {
    speech: String,
    display_text: String,
    expect_response: bool,
    rich_response: RichResponse,
    system_intent: Option<SystemIntent>,
    settings: PayloadSettings,
}

impl GoogleData {
    pub fn new() -> Self {
        Self::with_settings(PayloadSettings::default())
    }

    pub fn with_settings(settings: PayloadSettings) -> Self {
        Self {
            speech: String::new(),
            display_text: String::new(),
            expect_response: settings.expect_user_response,
            rich_response: RichResponse::new(),
            system_intent: None,
            settings,
        }
    }

    /// Records a spoken response and asks for the default expected intent.
    ///
    /// The simple response is also appended to the rich response items; the
    /// top-level speech fields always reflect the latest call.
    pub fn simple_response(
        &mut self,
        speech: impl Into<String>,
        display_text: impl Into<String>,
        expect_response: bool,
    ) -> GooglePayload {
        self.speech = speech.into();
        self.display_text = display_text.into();
        self.expect_response = expect_response;

        self.rich_response
            .add_simple_response_item(self.speech.clone(), self.display_text.clone());

        let intent = SystemIntent::new(self.settings.default_expected_intent());
        tracing::debug!(
            "Simple response recorded (expect_response={}), expecting {}",
            expect_response,
            intent.intent()
        );
        self.system_intent = Some(intent);

        self.load_data()
    }

    pub fn suggestion(&mut self, title: impl Into<String>) -> GooglePayload {
        self.rich_response.add_suggestion(title);
        self.load_data()
    }

    pub fn link_out(
        &mut self,
        destination_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<GooglePayload> {
        self.rich_response.add_link_out(destination_name, url)?;
        Ok(self.load_data())
    }

    /// Replaces the expected intent, e.g. to ask for an option selection.
    pub fn expect_intent(&mut self, intent: SystemIntent) -> GooglePayload {
        tracing::debug!("Expecting intent {}", intent.intent());
        self.system_intent = Some(intent);
        self.load_data()
    }

    pub fn speech(&self) -> &str {
        &self.speech
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn expect_response(&self) -> bool {
        self.expect_response
    }

    pub fn rich_response(&self) -> &RichResponse {
        &self.rich_response
    }

    pub fn system_intent(&self) -> Option<&SystemIntent> {
        self.system_intent.as_ref()
    }

    pub fn settings(&self) -> &PayloadSettings {
        &self.settings
    }
}

impl Default for GoogleData {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadData for GoogleData {
    type Payload = GooglePayload;

    fn load_data(&self) -> GooglePayload {
        GooglePayload {
            speech: self.speech.clone(),
            expect_user_response: self.expect_response,
            is_ssml: self.settings.is_ssml,
            final_response: Map::new(),
            no_input_prompts: Vec::new(),
            rich_response: self.rich_response.load_data(),
            system_intent: self.system_intent.as_ref().map(|intent| intent.load_data()),
        }
    }
}

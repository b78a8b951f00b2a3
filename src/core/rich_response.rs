use crate::core::LoadData;
use crate::domain::model::{
    LinkOutSuggestion, ResponseItem, RichResponsePayload, SimpleResponse, Suggestion,
};
use crate::utils::error::{PayloadError, Result};

/// Accumulates the presentational items of a response: simple responses,
/// suggestion chips and at most one link-out chip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichResponse {
    items: Vec<ResponseItem>,
    suggestions: Vec<Suggestion>,
    link_out: Option<LinkOutSuggestion>,
}

impl RichResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a simple response carrying speech and the text to show.
    ///
    /// The platform requires a simple response as the first item of every
    /// rich response.
    pub fn add_simple_response_item(
        &mut self,
        speech: impl Into<String>,
        display_text: impl Into<String>,
    ) -> &mut Self {
        let simple_response = SimpleResponse {
            text_to_speech: speech.into(),
            display_text: display_text.into(),
        };
        tracing::debug!(
            "Adding simple response item #{}: {:?}",
            self.items.len() + 1,
            simple_response.text_to_speech
        );
        self.items.push(ResponseItem { simple_response });
        self
    }

    /// Adds a suggestion chip the user can tap to reply.
    ///
    /// Chips are ignored by the platform when the response is final.
    pub fn add_suggestion(&mut self, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        tracing::debug!("Adding suggestion chip: {:?}", title);
        self.suggestions.push(Suggestion { title });
        self
    }

    /// Sets the chip linking out to an associated app or site.
    pub fn add_link_out(
        &mut self,
        destination_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<&mut Self> {
        let destination_name = destination_name.into();
        if let Some(existing) = &self.link_out {
            tracing::warn!(
                "Rejected link-out to {:?}: {:?} is already set",
                destination_name,
                existing.destination_name
            );
            return Err(PayloadError::DuplicateLinkOut);
        }

        let url = url.into();
        tracing::debug!("Setting link-out suggestion: {} -> {}", destination_name, url);
        self.link_out = Some(LinkOutSuggestion {
            destination_name,
            url,
        });
        Ok(self)
    }

    pub fn items(&self) -> &[ResponseItem] {
        &self.items
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn link_out(&self) -> Option<&LinkOutSuggestion> {
        self.link_out.as_ref()
    }
}

impl LoadData for RichResponse {
    type Payload = RichResponsePayload;

    fn load_data(&self) -> RichResponsePayload {
        RichResponsePayload {
            items: self.items.clone(),
            suggestions: self.suggestions.clone(),
            link_out_suggestion: self.link_out.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_rich_response_only_has_items() {
        let rich = RichResponse::new();
        assert_eq!(rich.to_value().unwrap(), json!({ "items": [] }));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut rich = RichResponse::new();
        rich.add_simple_response_item("first", "First")
            .add_simple_response_item("second", "Second");

        let value = rich.to_value().unwrap();
        assert_eq!(
            value["items"],
            json!([
                { "simpleResponse": { "textToSpeech": "first", "displayText": "First" } },
                { "simpleResponse": { "textToSpeech": "second", "displayText": "Second" } }
            ])
        );
    }

    #[test]
    fn test_suggestions_appear_once_added() {
        let mut rich = RichResponse::new();
        rich.add_suggestion("Yes").add_suggestion("No");

        let value = rich.to_value().unwrap();
        assert_eq!(value["suggestions"], json!([{ "title": "Yes" }, { "title": "No" }]));
        assert!(value.get("linkOutSuggestion").is_none());
    }

    #[test]
    fn test_second_link_out_is_rejected() {
        let mut rich = RichResponse::new();
        rich.add_link_out("Website", "https://example.com").unwrap();

        let err = rich
            .add_link_out("Other", "https://other.example.com")
            .unwrap_err();
        assert!(matches!(err, PayloadError::DuplicateLinkOut));

        let link_out = rich.link_out().unwrap();
        assert_eq!(link_out.destination_name, "Website");
        assert_eq!(link_out.url, "https://example.com");
    }

    #[test]
    fn test_load_data_does_not_consume_state() {
        let mut rich = RichResponse::new();
        rich.add_simple_response_item("hi", "Hi");

        assert_eq!(rich.load_data(), rich.load_data());
        assert_eq!(rich.items().len(), 1);
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let mut rich = RichResponse::new();
        rich.add_simple_response_item("", "").add_suggestion("");
        rich.add_link_out("", "").unwrap();

        let value = rich.to_value().unwrap();
        assert_eq!(value["linkOutSuggestion"], json!({ "destinationName": "", "url": "" }));
    }
}

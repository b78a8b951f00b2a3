//! Option items and selectors for `actions.intent.OPTION` requests.
//!
//! Option items follow a slightly different layout from list or carousel
//! items: only the latter carry a description and an image.

use crate::domain::model::{
    Image, ListSelect, OptionInfo, OptionItem, OptionValueSpec, SelectItems,
};

/// Builds an item for a simple selector.
///
/// `key` is sent back to the agent when the item is chosen. `synonyms` can
/// also trigger the item in dialog; the title acts as one when given.
pub fn build_option_item(
    key: impl Into<String>,
    synonyms: Option<Vec<String>>,
    title: Option<String>,
) -> OptionItem {
    OptionItem {
        option_info: OptionInfo {
            key: key.into(),
            synonyms: synonyms.unwrap_or_default(),
        },
        title,
        description: None,
        image: None,
    }
}

/// Builds an item that may be added to a list or carousel selector.
pub fn build_list_item(
    key: impl Into<String>,
    title: impl Into<String>,
    synonyms: Vec<String>,
    description: Option<String>,
    image: Option<Image>,
) -> OptionItem {
    let mut item = build_option_item(key, Some(synonyms), Some(title.into()));
    item.description = description;
    item.image = image;
    item
}

impl OptionValueSpec {
    /// A selector with no associated GUI.
    pub fn add_simple_select(&mut self, items: Vec<OptionItem>) -> &mut Self {
        self.clear_selector();
        tracing::debug!("Using simple select with {} items", items.len());
        self.simple_select = Some(SelectItems { items });
        self
    }

    /// A selector rendered as a list card.
    pub fn add_list_select(&mut self, title: Option<String>, items: Vec<OptionItem>) -> &mut Self {
        self.clear_selector();
        tracing::debug!("Using list select with {} items", items.len());
        self.list_select = Some(ListSelect { title, items });
        self
    }

    /// A selector rendered as a card carousel.
    pub fn add_carousel_select(&mut self, items: Vec<OptionItem>) -> &mut Self {
        self.clear_selector();
        tracing::debug!("Using carousel select with {} items", items.len());
        self.carousel_select = Some(SelectItems { items });
        self
    }

    fn has_selector(&self) -> bool {
        self.simple_select.is_some() || self.list_select.is_some() || self.carousel_select.is_some()
    }

    fn clear_selector(&mut self) {
        if self.has_selector() {
            tracing::debug!("Replacing previously chosen selector");
        }
        self.simple_select = None;
        self.list_select = None;
        self.carousel_select = None;
    }
}

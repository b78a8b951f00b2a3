pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{PayloadSettings, ResponseScript};
pub use crate::core::{
    google_data::GoogleData,
    rich_response::RichResponse,
    system_intent::{ExpectedIntent, SystemIntent},
    LoadData,
};
pub use crate::domain::model::GooglePayload;
pub use crate::utils::error::{PayloadError, Result};

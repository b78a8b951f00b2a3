#[cfg(feature = "cli")]
pub mod cli;
pub mod script;
pub mod settings;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use script::ResponseScript;
pub use settings::PayloadSettings;

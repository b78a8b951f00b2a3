use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "assistant-payload")]
#[command(about = "Render an Actions on Google webhook payload from a TOML response script")]
pub struct CliConfig {
    /// Path to the TOML response script
    #[arg(short, long, default_value = "response.toml")]
    pub script: String,

    /// Optional TOML settings file, overrides the script's [settings] table
    #[arg(long)]
    pub settings: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Wrap the payload as the webhook `data` field: {"google": ...}
    #[arg(long)]
    pub wrap: bool,

    /// Validate the script without rendering it
    #[arg(long)]
    pub check: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit JSON log lines instead of the compact format
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "assistant-payload",
            "--script",
            "greeting.toml",
            "--pretty",
            "--wrap",
        ]);
        assert_eq!(config.script, "greeting.toml");
        assert!(config.pretty);
        assert!(config.wrap);
        assert!(!config.check);
        assert!(config.settings.is_none());
        assert!(!config.json_logs);
    }

    #[test]
    fn test_json_logs_flag() {
        let config = CliConfig::parse_from(["assistant-payload", "--json-logs", "--check"]);
        assert!(config.json_logs);
        assert!(config.check);
    }

    #[test]
    fn test_default_script_path() {
        let config = CliConfig::parse_from(["assistant-payload"]);
        assert_eq!(config.script, "response.toml");
    }
}

use assistant_payload::utils::{logger, validation::Validate};
use assistant_payload::{CliConfig, PayloadSettings, ResponseScript};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting assistant-payload preview");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut script = match ResponseScript::from_file(&config.script) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("❌ Failed to load script '{}': {}", config.script, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 命令列指定的設定檔覆蓋腳本內的 [settings]
    if let Some(path) = &config.settings {
        match PayloadSettings::from_file(path) {
            Ok(settings) => {
                tracing::info!("🔧 Using settings from {}", path);
                script.settings = Some(settings);
            }
            Err(e) => {
                eprintln!("❌ Failed to load settings '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }

    // 驗證腳本
    if let Err(e) = script.validate() {
        tracing::error!("❌ Script validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.check {
        tracing::info!(
            "✅ Script '{}' is valid ({} steps)",
            script.display_name(),
            script.steps.len()
        );
        return Ok(());
    }

    let payload = match script.render() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("❌ Rendering failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let output = if config.wrap {
        payload.into_data_field()?
    } else {
        serde_json::to_value(&payload)?
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    tracing::info!("✅ Payload rendered");
    Ok(())
}

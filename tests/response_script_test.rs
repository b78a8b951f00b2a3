use anyhow::Result;
use assistant_payload::utils::validation::Validate;
use assistant_payload::{PayloadSettings, ResponseScript};
use serde_json::json;
use tempfile::TempDir;

/// 從檔案載入腳本並渲染成 payload
#[test]
fn test_render_script_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("order.toml");

    std::fs::write(
        &script_path,
        r#"
name = "order-status"
description = "Tell the user where their order is"

[settings]
is_ssml = false

[[steps]]
kind = "simple_response"
speech = "Your order ships tomorrow."
display_text = "Ships tomorrow"
expect_response = false

[[steps]]
kind = "link_out"
destination = "Track order"
url = "https://example.com/track"
"#,
    )?;

    let script = ResponseScript::from_file(&script_path)?;
    script.validate()?;

    let value = serde_json::to_value(script.render()?)?;
    assert_eq!(value["isSsml"], json!(false));
    assert_eq!(value["expectUserResponse"], json!(false));
    assert_eq!(
        value["richResponse"]["linkOutSuggestion"],
        json!({ "destinationName": "Track order", "url": "https://example.com/track" })
    );
    assert!(value["richResponse"].get("suggestions").is_none());

    println!("✅ Script rendered: {}", value);
    Ok(())
}

#[test]
fn test_script_settings_default_intent() -> Result<()> {
    let script = ResponseScript::from_toml_str(
        r#"
[settings]
default_intent = "confirmation"

[[steps]]
kind = "simple_response"
speech = "Shall I book it?"
display_text = "Book it?"
"#,
    )?;
    script.validate()?;

    let payload = script.render()?;
    assert_eq!(
        payload.system_intent.map(|intent| intent.intent),
        Some("actions.intent.CONFIRMATION".to_string())
    );
    Ok(())
}

#[test]
fn test_settings_file_overrides_script_settings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "expect_user_response = false\n")?;

    let mut script = ResponseScript::from_toml_str(
        r#"
[[steps]]
kind = "suggestion"
title = "Menu"
"#,
    )?;
    script.settings = Some(PayloadSettings::from_file(&settings_path)?);

    let payload = script.render()?;
    assert!(!payload.expect_user_response);
    assert!(payload.system_intent.is_none());
    Ok(())
}

#[test]
fn test_empty_suggestion_title_fails_validation() -> Result<()> {
    let script = ResponseScript::from_toml_str(
        r#"
[[steps]]
kind = "suggestion"
title = "  "
"#,
    )?;

    let err = script.validate().unwrap_err();
    assert!(err.to_string().contains("steps[0].title"));
    Ok(())
}

#[test]
fn test_missing_script_file() {
    let result = ResponseScript::from_file("/nonexistent/response.toml");
    assert!(result.is_err());
}

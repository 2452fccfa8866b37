use async_trait::async_trait;
use dioxus::document::eval;
use serde::Deserialize;

use services::{ShareError, ShareSink};

#[derive(Clone, Debug, Deserialize)]
struct ClipboardWriteResult {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Writes share text through the webview's `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipboardShareSink;

#[async_trait(?Send)]
impl ShareSink for ClipboardShareSink {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let script = write_clipboard_script(text);
        let result = eval(&script)
            .join::<ClipboardWriteResult>()
            .await
            .map_err(|_| ShareError::Unavailable)?;

        if result.ok {
            Ok(())
        } else {
            Err(ShareError::Rejected(
                result.error.unwrap_or_else(|| "unknown".to_string()),
            ))
        }
    }
}

fn write_clipboard_script(text: &str) -> String {
    format!(
        r#"
        const text = {text:?};
        try {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                await navigator.clipboard.writeText(text);
                return {{ ok: true }};
            }}
            return {{ ok: false, error: "clipboard api unavailable" }};
        }} catch (err) {{
            return {{ ok: false, error: String(err) }};
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_script_escapes_text() {
        let script = write_clipboard_script("say \"hi\"");
        assert!(script.contains(r#"const text = "say \"hi\"";"#));
        assert!(script.contains("navigator.clipboard.writeText(text)"));
    }
}

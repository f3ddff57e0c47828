use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Capability allow-list for the interactive preview frame. Scripts run,
/// but the frame gets no handle on the host page's storage or state.
pub const SANDBOX_FLAGS: &str = "allow-scripts allow-same-origin allow-popups allow-forms \
allow-downloads allow-modals allow-presentation allow-pointer-lock";

/// Feature grants for interactive and game content inside the frame.
pub const ALLOW_FEATURES: &str = "autoplay; camera; microphone; fullscreen; gamepad; \
clipboard-read; clipboard-write; web-share; accelerometer; gyroscope; magnetometer; \
payment; screen-wake-lock";

static THINKING_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("Invalid thinking regex"));

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("Invalid script regex")
});

static INLINE_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*("[^"]*"|'[^']*'|[^\s>]+)"#)
        .expect("Invalid handler regex")
});

static JAVASCRIPT_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript\s*:").expect("Invalid js-url regex"));

/// A ready-to-render preview: the full srcdoc document plus the iframe
/// capability grants the frontend must apply verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDocument {
    pub document: String,
    pub sandbox: String,
    pub allow: String,
}

/// Remove private `<think>` sections before any display path.
pub fn strip_thinking(html: &str) -> String {
    THINKING_BLOCK.replace_all(html, "").to_string()
}

/// Neutralize active content for display-only thumbnails: script blocks,
/// inline event handlers and javascript: URLs are stripped.
pub fn sanitize_static(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
    let without_handlers = INLINE_HANDLER.replace_all(&without_scripts, "");
    JAVASCRIPT_URL.replace_all(&without_handlers, "").to_string()
}

/// Entity-escape text interpolated into host-page markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap generated markup in a complete isolated document for the
/// interactive preview frame.
pub fn interactive_document(html: &str) -> PreviewDocument {
    let clean = strip_thinking(html);
    PreviewDocument {
        document: wrap_document(&clean, true),
        sandbox: SANDBOX_FLAGS.to_string(),
        allow: ALLOW_FEATURES.to_string(),
    }
}

/// Document for list thumbnails: same shell, but active content is
/// neutralized since thumbnails are never interacted with.
pub fn thumbnail_document(html: &str) -> String {
    let clean = sanitize_static(&strip_thinking(html));
    wrap_document(&clean, false)
}

fn wrap_document(body: &str, interactive: bool) -> String {
    let game_styles = if interactive {
        r#"
        canvas {
            display: block;
            touch-action: none;
            image-rendering: pixelated;
        }
        .game-container, .fullscreen, [data-game-container] {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            overflow: hidden;
        }"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <base target="_blank">
    <style>
        *, *::before, *::after {{ box-sizing: border-box; }}
        html, body {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: auto; }}{game_styles}
    </style>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{body}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thinking_blocks_are_stripped() {
        let raw = "<think>plan the layout\nstep by step</think><h1>Hi</h1>";
        assert_eq!(strip_thinking(raw), "<h1>Hi</h1>");

        let multiple = "<think>a</think><p>x</p><think>b</think>";
        assert_eq!(strip_thinking(multiple), "<p>x</p>");
    }

    #[test]
    fn interactive_document_keeps_scripts_and_grants() {
        let preview = interactive_document("<script>play()</script><canvas></canvas>");
        assert!(preview.document.contains("<script>play()</script>"));
        assert!(preview.sandbox.contains("allow-scripts"));
        assert!(!preview.sandbox.contains("allow-top-navigation"));
        assert!(preview.allow.contains("gamepad"));
    }

    #[test]
    fn thumbnail_neutralizes_active_content() {
        let raw = r#"<script>steal()</script><img src=x onerror="boom()"><a href="javascript:run()">go</a>"#;
        let doc = thumbnail_document(raw);
        assert!(!doc.contains("steal()"));
        assert!(!doc.contains("onerror"));
        assert!(!doc.to_lowercase().contains("javascript:"));
        assert!(doc.contains("<img src=x"));
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b>"name" & 'more'</b>"#),
            "&lt;b&gt;&quot;name&quot; &amp; &#39;more&#39;&lt;/b&gt;"
        );
    }
}

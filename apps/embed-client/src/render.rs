/// Sandbox grants the provider's signing frame needs to function
const IFRAME_SANDBOX: &str =
    "allow-same-origin allow-scripts allow-forms allow-popups allow-downloads";

/// Static HTML shell wrapping the embed URL in a sandboxed iframe
pub fn embed_page(embed_url: &str) -> String {
    let src = escape_attribute(embed_url);

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Document Signing</title>
  <style>
    body {{ margin: 0; font-family: system-ui, sans-serif; background: #f8fafc; }}
    header {{ padding: 1rem 1.5rem; background: #ffffff; border-bottom: 1px solid #e2e8f0; }}
    iframe {{ width: 100%; height: 800px; border: 0; background: #ffffff; }}
  </style>
</head>
<body>
  <header>
    <h1>Document Ready for Signing</h1>
    <p><code>{src}</code></p>
  </header>
  <iframe src="{src}" title="Document signing" sandbox="{IFRAME_SANDBOX}"></iframe>
</body>
</html>
"#
    )
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_the_url_in_a_sandboxed_frame() {
        let page = embed_page("https://provider/sign/abc?token=t1");

        assert!(page.contains(r#"src="https://provider/sign/abc?token=t1""#));
        assert!(page.contains(&format!(r#"sandbox="{IFRAME_SANDBOX}""#)));
    }

    #[test]
    fn attribute_characters_are_escaped() {
        let page = embed_page(r#"https://provider/sign/a"b&c"#);

        assert!(page.contains("https://provider/sign/a&quot;b&amp;c"));
        assert!(!page.contains(r#"a"b"#));
    }
}

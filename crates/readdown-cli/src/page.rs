//! Full-page wrapper around a rendered fragment.
//!
//! The page forbids scripts through a Content-Security-Policy meta tag, so a
//! browser opening the output will not run anything even if markup slipped
//! through.

use readdown_engine::rendering::escape::escape_html;

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'none'; script-src 'none'; style-src 'unsafe-inline'; img-src *";

const STYLES: &str = r#":root {
  --text: #24292f;
  --bg: #ffffff;
  --code-bg: #f6f8fa;
  --border: #d0d7de;
  --link: #0969da;
  --muted: #57606a;
}
@media (prefers-color-scheme: dark) {
  :root {
    --text: #e6edf3;
    --bg: #0d1117;
    --code-bg: #161b22;
    --border: #30363d;
    --link: #58a6ff;
    --muted: #8b949e;
  }
}
* { box-sizing: border-box; }
body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", "Noto Sans", Helvetica, Arial, sans-serif;
  font-size: 16px;
  line-height: 1.6;
  color: var(--text);
  background: var(--bg);
  max-width: 820px;
  margin: 0 auto;
  padding: 32px 28px;
  overflow-wrap: break-word;
}
h1, h2, h3, h4, h5, h6 { margin: 24px 0 16px; font-weight: 600; line-height: 1.25; }
h1, h2 { padding-bottom: 0.3em; border-bottom: 1px solid var(--border); }
h1 { font-size: 2em; }
h2 { font-size: 1.5em; }
h3 { font-size: 1.25em; }
h6 { font-size: 0.85em; color: var(--muted); }
p, ul, ol, pre, table, blockquote { margin-top: 0; margin-bottom: 16px; }
a { color: var(--link); text-decoration: none; }
a:hover { text-decoration: underline; }
code {
  font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
  font-size: 85%;
  padding: 0.2em 0.4em;
  background: var(--code-bg);
  border-radius: 6px;
}
pre { padding: 16px; overflow: auto; line-height: 1.45; background: var(--code-bg); border-radius: 6px; }
pre code { padding: 0; background: transparent; font-size: 100%; }
blockquote { margin-left: 0; padding: 0 1em; color: var(--muted); border-left: 0.25em solid var(--border); }
ul, ol { padding-left: 2em; }
hr { height: 0.25em; margin: 24px 0; background: var(--border); border: 0; }
img { max-width: 100%; height: auto; }
del { opacity: 0.6; }
table { border-collapse: collapse; display: block; max-width: 100%; overflow: auto; }
th, td { padding: 6px 13px; border: 1px solid var(--border); }
th { font-weight: 600; background: var(--code-bg); }
tr:nth-child(even) { background: var(--code-bg); }
ul.task-list { list-style: none; padding-left: 0; }
li.task-item { position: relative; padding-left: 1.7em; }
li.task-item input[type="checkbox"] { position: absolute; left: 0; top: 0.35em; margin: 0; }
"#;

/// What goes into the page around the fragment.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageOptions<'a> {
    /// Shown in the browser tab; escaped before use.
    pub title: Option<&'a str>,
    /// Appended after the built-in styles.
    pub extra_css: Option<&'a str>,
}

/// Wraps a rendered fragment in a complete HTML page.
pub fn wrap(body: &str, options: &PageOptions<'_>) -> String {
    let mut page = String::with_capacity(body.len() + STYLES.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!(
        "<meta http-equiv=\"Content-Security-Policy\" content=\"{CONTENT_SECURITY_POLICY}\">\n"
    ));
    page.push_str("<meta name=\"color-scheme\" content=\"light dark\">\n");
    if let Some(title) = options.title {
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    page.push_str("<style>\n");
    page.push_str(STYLES);
    if let Some(css) = options.extra_css {
        // `</` would let the stylesheet close its own <style> element.
        page.push_str(&css.replace("</", "<\\/"));
        page.push('\n');
    }
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(body);
    page.push_str("\n</body>\n</html>\n");
    page
}

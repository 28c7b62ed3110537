//! A single server-rendered page: a message field, a Send button, and one
//! labeled section per collaborator once something has been sent.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::consts::{CSHARP_KEY, DEFAULT_UI_INPUT, JAVA_KEY};

#[derive(Debug, Deserialize)]
pub(super) struct UiForm {
    #[serde(default)]
    input: String,
}

/// GET /ui
pub(super) async fn show() -> Html<String> {
    Html(render_page(DEFAULT_UI_INPUT, None))
}

/// POST /ui
pub(super) async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UiForm>,
) -> Html<String> {
    let (csharp, java) = state.bridge.outcomes(&form.input).await;
    let (csharp, java) = (csharp.into_text(), java.into_text());
    Html(render_page(&form.input, Some((&csharp, &java))))
}

/// Render the page. `outputs` is `(csharp, java)` after a submission.
pub fn render_page(input: &str, outputs: Option<(&str, &str)>) -> String {
    let results = match outputs {
        Some((csharp, java)) => format!(
            r#"
    <section id="csharp">
      <h2>{}</h2>
      <pre>{}</pre>
    </section>
    <section id="java">
      <h2>{}</h2>
      <pre>{}</pre>
    </section>"#,
            escape_html(CSHARP_KEY),
            escape_html(csharp),
            escape_html(JAVA_KEY),
            escape_html(java),
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Multi-Language Communication</title>
  </head>
  <body>
    <h1>Multi-Language Communication</h1>
    <form method="post" action="/ui">
      <label for="input">Enter message</label>
      <input type="text" id="input" name="input" value="{}">
      <button type="submit">Send</button>
    </form>{}
  </body>
</html>
"#,
        escape_html(input),
        results
    )
}

/// Escape text for use in element content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

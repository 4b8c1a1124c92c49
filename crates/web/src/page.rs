//! The single HTML page

use maxarea_common::Outcome;

/// Render the form, pre-filled with `input`, and the outcome slot if any.
pub fn render_page(input: &str, outcome: Option<&Outcome>) -> String {
    let slot = match outcome {
        Some(outcome) => format!(
            r#"<p id="{id}" class="{id}">{text}</p>"#,
            id = outcome.element_id(),
            text = escape_html(&outcome.text()),
        ),
        None => String::new(),
    };

    format!(
        "{head}{form}{slot}{tail}",
        head = PAGE_HEAD,
        form = PAGE_FORM.replace("{value}", &escape_html(input)),
        slot = slot,
        tail = PAGE_TAIL,
    )
}

/// Minimal escaping for text and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Container With Most Water</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
        input { width: 100%; padding: 0.5rem; font-family: monospace; box-sizing: border-box; }
        .result { color: #14532d; font-weight: bold; }
        .error { color: #991b1b; font-weight: bold; }
    </style>
</head>
<body>
<main>
    <h1>Container With Most Water</h1>
"#;

const PAGE_FORM: &str = r#"    <form method="post" action="/">
        <label for="heights">Heights (comma-separated)</label>
        <input type="text" id="heights" name="heights" value="{value}" autocomplete="off" autofocus>
        <button type="submit">Compute</button>
    </form>
"#;

const PAGE_TAIL: &str = r#"
</main>
</body>
</html>
"#;

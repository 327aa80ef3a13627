//! Markup and attribute names of the loading state.

/// Class put on the container while it is loading.
pub const LOADING_CLASS: &str = "loading";

/// Where each control's label is saved when the loading state starts.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

pub const SPINNER_MARKUP: &str =
    r#"<span class="spinner-border spinner-border-sm me-2" role="status"></span>"#;

/// Busy label for a `<button>`: spinner followed by the text.
pub fn button_loading_html(label: &str) -> String {
    format!("{}{}", SPINNER_MARKUP, escape_html(label))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

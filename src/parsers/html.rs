use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>").expect("Line break pattern should be valid")
});

/// Replaces every `<br>` / `<br/>` marker with a single space.
/// Surrounding text is left exactly as it was.
pub fn replace_line_breaks(markup: &str) -> String {
    LINE_BREAK_REGEX.replace_all(markup, " ").into_owned()
}

/// Returns the first element under `fragment` matching `selector`, if any
pub fn first_match<'a>(fragment: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    fragment.select(selector).next()
}

/// Text content of the first match, trimmed. A miss yields an empty string.
pub fn select_text(fragment: ElementRef<'_>, selector: &Selector) -> String {
    match first_match(fragment, selector) {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}

/// Inner markup of the first match. A miss yields an empty string.
pub fn select_inner_html(fragment: ElementRef<'_>, selector: &Selector) -> String {
    first_match(fragment, selector)
        .map(|element| element.inner_html())
        .unwrap_or_default()
}

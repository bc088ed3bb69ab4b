//! Plain-text summary of a fetched page, shown inside the document panel.

use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern"));

/// Elements whose content is never shown.
static HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|head|noscript)\b.*?</(script|style|head|noscript)>")
        .expect("hidden element pattern")
});

/// Tags that end a line of text.
static BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(br|/p|/div|/li|/h[1-6]|/tr|/section|/article)\b[^>]*>")
        .expect("line break pattern")
});

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));

/// What the panel shows for a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub url: String,
    pub status: u16,
    pub title: Option<String>,
    pub text: String,
}

impl DocumentSummary {
    pub fn from_html(url: String, status: u16, html: &str) -> Self {
        Self {
            url,
            status,
            title: extract_title(html),
            text: html_to_text(html),
        }
    }
}

/// Contents of the first `<title>` element, whitespace collapsed.
pub fn extract_title(html: &str) -> Option<String> {
    let title = collapse_whitespace(&decode_entities(TITLE.captures(html)?.get(1)?.as_str()));
    (!title.is_empty()).then_some(title)
}

/// Strips markup, scripts and styles, leaving readable text with one
/// paragraph per line.
pub fn html_to_text(html: &str) -> String {
    let text = HIDDEN.replace_all(html, " ");
    let text = BREAKS.replace_all(&text, "\n");
    let text = TAGS.replace_all(&text, " ");
    let text = decode_entities(&text);

    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

//! Minimal Markdown-to-HTML conversion for long-form content bodies
//!
//! Only a fixed subset is understood: `#`/`##`/`###` headings, `**bold**`,
//! `*italic*`, `- ` list items and line breaks. The rules run in a fixed
//! order over the whole text and each one sees the output of the previous
//! one. Other HTML in the input passes through untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref HEADING_4: Regex = Regex::new(r"(?m)^### (.*)$").unwrap();
    static ref HEADING_3: Regex = Regex::new(r"(?m)^## (.*)$").unwrap();
    static ref HEADING_2: Regex = Regex::new(r"(?m)^# (.*)$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^- (.*)$").unwrap();
    static ref ADJACENT_LISTS: Regex = Regex::new(r"</ul>\n<ul>").unwrap();
    static ref BLOCK_NEWLINE: Regex = Regex::new(r"(</h[234]>|</ul>)\n|\n(<h[234]>|<ul>)").unwrap();
    static ref LIST_MARKER: Regex = Regex::new(r"(?m)^(?:#{1,3}|-) ").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Restricted Markdown converter
pub struct MarkdownLite;

impl MarkdownLite {
    /// Convert markdown text to HTML
    pub fn render(markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let text = markdown.replace("\r\n", "\n");

        // Longest prefix first
        let text = HEADING_4.replace_all(&text, "<h4>${1}</h4>");
        let text = HEADING_3.replace_all(&text, "<h3>${1}</h3>");
        let text = HEADING_2.replace_all(&text, "<h2>${1}</h2>");

        // Bold before italic so `**x**` is not read as two italics
        let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
        let text = ITALIC.replace_all(&text, "<em>${1}</em>");

        // Each item gets its own list, then neighbouring lists are merged
        let text = LIST_ITEM.replace_all(&text, "<ul><li>${1}</li></ul>");
        let text = ADJACENT_LISTS.replace_all(&text, "");

        // Newlines next to block elements do not become breaks
        let text = BLOCK_NEWLINE.replace_all(&text, |caps: &Captures| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map_or(String::new(), |m| m.as_str().to_string())
        });

        text.replace('\n', "<br>")
    }

    /// Render optional markdown, absent input yields an empty string
    pub fn render_opt(markdown: Option<&str>) -> String {
        markdown.map(Self::render).unwrap_or_default()
    }

    /// Flatten markdown into a single line of plain text
    pub fn plain_text(markdown: &str) -> String {
        let text = LIST_MARKER.replace_all(markdown, "");
        let text = text.replace('*', "");
        WHITESPACE.replace_all(text.trim(), " ").into_owned()
    }
}

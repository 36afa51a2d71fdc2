//! HTML helper functions

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("/admin/", "Add content", None) // -> <a href="/admin/">Add content</a>
/// ```
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    if href.starts_with("http://") || href.starts_with("https://") {
        format!(
            r#"<a href="{}"{} target="_blank" rel="noopener">{}</a>"#,
            href, class_attr, text
        )
    } else {
        format!(r#"<a href="{}"{}>{}</a>"#, href, class_attr, text)
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

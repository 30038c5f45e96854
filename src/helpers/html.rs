//! HTML helper functions

use super::url::{is_external, url_for};
use crate::config::SiteConfig;

/// Generate an anchor tag; `text` is inserted as-is so callers escape it
///
/// # Examples
/// ```ignore
/// link_to(&config, "/about", "About", None) // -> <a href="/about">About</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    if is_external(path) {
        format!(
            r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(path),
            class_attr,
            text
        )
    } else {
        format!(
            r#"<a href="{}"{}>{}</a>"#,
            html_escape(&url_for(config, path)),
            class_attr,
            text
        )
    }
}

/// Generate an avatar image tag
pub fn avatar_tag(config: &SiteConfig, src: &str, alt: &str, size: &str) -> String {
    if src.is_empty() {
        // Initial-letter placeholder when the author has no picture
        let initial = alt.chars().next().map(String::from).unwrap_or_default();
        return format!(
            r#"<span class="avatar avatar-{} avatar-empty">{}</span>"#,
            size,
            html_escape(&initial)
        );
    }

    let src = if is_external(src) || src.starts_with("data:") {
        src.to_string()
    } else {
        url_for(config, src)
    };

    format!(
        r#"<img class="avatar avatar-{}" src="{}" alt="{}" loading="lazy">"#,
        size,
        html_escape(&src),
        html_escape(alt)
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

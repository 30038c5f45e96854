//! Home and About: a heading and a paragraph from site.yml

use crate::config::PageText;
use crate::helpers::html_escape;

pub(super) fn render(text: &PageText) -> String {
    format!(
        r#"<h1 class="page-heading">{}</h1><p class="page-body">{}</p>"#,
        html_escape(&text.heading),
        html_escape(&text.body)
    )
}

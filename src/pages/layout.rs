//! Application shell: document head, navigation bar and page container

use super::{Page, PageContainer, TRANSITION_SCRIPT};
use crate::helpers::{html_escape, link_to, url_for};
use crate::router::Route;
use crate::RenderContext;

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "nav.home"),
    (Route::BlogList, "nav.blog"),
    (Route::Authors, "nav.authors"),
    (Route::About, "nav.about"),
];

const SEARCH_SCRIPT: &str = r#"<script>
(function() {
    var input = document.querySelector('[data-search-input]');
    if (!input) return;
    var items = document.querySelectorAll('[data-search]');
    var empty = document.querySelector('[data-no-match]');
    input.form.addEventListener('submit', function(e) { e.preventDefault(); });
    input.addEventListener('input', function() {
        var term = input.value.toLowerCase();
        var shown = 0;
        items.forEach(function(item) {
            var hit = item.getAttribute('data-search').indexOf(term) !== -1;
            item.hidden = !hit;
            if (hit) shown++;
        });
        if (empty) empty.hidden = shown !== 0;
        var url = new URL(location.href);
        if (input.value) url.searchParams.set('q', input.value); else url.searchParams.delete('q');
        history.replaceState(null, '', url);
    });
})();
</script>"#;

/// Render a complete HTML document for the page mounted at `key`
///
/// `route` is `None` for unmatched paths: the shell is still drawn with an
/// empty content area.
pub fn render_document(
    ctx: &RenderContext,
    key: &str,
    route: Option<&Route>,
    page: &Page,
    query: &str,
) -> String {
    let config = &ctx.config;
    let section = route.map(Route::section).unwrap_or("home");

    let body_style = config
        .background_for(section)
        .map(|bg| {
            format!(
                r#" style="background-image: linear-gradient(rgba(255, 255, 255, {}), rgba(255, 255, 255, {})), url('{}')""#,
                bg.opacity,
                bg.opacity,
                html_escape(&url_for(config, &bg.image))
            )
        })
        .unwrap_or_default();

    let content = match route {
        Some(_) => {
            PageContainer::new(key, page.max_width()).render(&page.render_body(ctx, query))
        }
        None => String::new(),
    };

    let search = match page {
        Page::BlogList(_) => SEARCH_SCRIPT,
        _ => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{css}</style>
</head>
<body data-section="{section}"{body_style}>
<div class="app">
{nav}
{content}
</div>
{transition}{search}
</body>
</html>
"#,
        lang = html_escape(&config.language),
        title = html_escape(&page.title(ctx)),
        css = config.theme.stylesheet(),
        section = section,
        body_style = body_style,
        nav = navbar(ctx, route),
        content = content,
        transition = TRANSITION_SCRIPT,
        search = search,
    )
}

/// Brand plus one link per top-level page; the exact current route is active
fn navbar(ctx: &RenderContext, current: Option<&Route>) -> String {
    let mut html = String::from(r#"<nav class="navbar">"#);
    html.push_str(&link_to(
        &ctx.config,
        "/",
        &html_escape(&ctx.config.title),
        Some("brand"),
    ));
    for (route, label) in NAV_ITEMS.iter() {
        let class = if current == Some(route) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html.push_str(&link_to(
            &ctx.config,
            &route.path(),
            &html_escape(&ctx.i18n.get(label)),
            Some(class),
        ));
    }
    html.push_str("</nav>");
    html
}

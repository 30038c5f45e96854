//! Blog list and blog post pages

use super::render_state;
use crate::content::search::{haystack, matches};
use crate::content::{LoadState, PostDetail, PostSummary};
use crate::helpers::{avatar_tag, html_escape, link_to};
use crate::router::Route;
use crate::RenderContext;

/// Search form plus every post; posts not matching `query` are hidden
///
/// The browser re-filters on each keystroke using `data-search`, so the
/// full list is always present in the document.
pub(super) fn render_list(
    ctx: &RenderContext,
    state: &LoadState<Vec<PostSummary>>,
    query: &str,
) -> String {
    let mut html = search_form(ctx, query);
    html.push_str(&render_state(
        ctx,
        state,
        "status.no_posts",
        "status.no_posts",
        |posts| {
            let mut list = String::from(r#"<ul class="post-list">"#);
            let mut shown = 0;
            for post in posts {
                let hit = matches(post, query);
                if hit {
                    shown += 1;
                }
                list.push_str(&post_item(ctx, post, hit));
            }
            list.push_str("</ul>");
            list.push_str(&format!(
                r#"<p class="status" data-no-match{}>{}</p>"#,
                if shown == 0 { "" } else { " hidden" },
                html_escape(&ctx.i18n.get("status.no_match"))
            ));
            list
        },
    ));
    html
}

fn search_form(ctx: &RenderContext, query: &str) -> String {
    format!(
        r#"<form class="search" method="get" action="{}" role="search"><input type="search" name="q" value="{}" placeholder="{}" aria-label="{}" autocomplete="off" data-search-input></form>"#,
        html_escape(&crate::helpers::url_for(&ctx.config, &Route::BlogList.path())),
        html_escape(query),
        html_escape(&ctx.i18n.get("search.placeholder")),
        html_escape(&ctx.i18n.get("search.placeholder")),
    )
}

fn post_item(ctx: &RenderContext, post: &PostSummary, visible: bool) -> String {
    let route = Route::BlogPost {
        id: post.id.clone(),
    };
    format!(
        r#"<li class="post-item"{} data-search="{}">{}<p class="post-summary">{}</p>{}{}</li>"#,
        if visible { "" } else { " hidden" },
        html_escape(&haystack(post)),
        link_to(
            &ctx.config,
            &route.path(),
            &html_escape(&post.title),
            Some("post-title")
        ),
        html_escape(&post.summary),
        post_meta(ctx, post),
        tag_list(&post.tags),
    )
}

/// Author chip and date
pub(super) fn post_meta(ctx: &RenderContext, post: &PostSummary) -> String {
    let author = Route::Author {
        id: post.author_id.clone(),
    };
    let chip = format!(
        "{}<span>{}</span>",
        avatar_tag(&ctx.config, &post.author_avatar, &post.author_name, "sm"),
        html_escape(&post.author_name)
    );
    format!(
        r#"<div class="post-meta">{}<time datetime="{}">{}</time></div>"#,
        link_to(&ctx.config, &author.path(), &chip, Some("author-chip")),
        html_escape(&post.date),
        html_escape(&post.date)
    )
}

pub(super) fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let items: String = tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
        .collect();
    format!(r#"<div class="tags">{}</div>"#, items)
}

pub(super) fn render_post(ctx: &RenderContext, state: &LoadState<PostDetail>) -> String {
    let back = link_to(
        &ctx.config,
        &Route::BlogList.path(),
        &format!("← {}", html_escape(&ctx.i18n.get("back"))),
        Some("back"),
    );
    let body = render_state(
        ctx,
        state,
        "status.post_not_found",
        "status.post_not_found",
        |detail| {
            format!(
                r#"<article class="post"><h1 class="post-heading">{}</h1>{}{}<div class="markdown-body">{}</div></article>"#,
                html_escape(&detail.summary.title),
                post_meta(ctx, &detail.summary),
                tag_list(&detail.summary.tags),
                detail.html
            )
        },
    );
    format!("{}{}", back, body)
}

//! Single author page: profile, publications and recent posts

use super::blog::{post_meta, tag_list};
use super::render_state;
use crate::content::{Author, AuthorDetail, LoadState, Publication};
use crate::helpers::{avatar_tag, html_escape, link_to};
use crate::router::Route;
use crate::RenderContext;

pub(super) fn render(ctx: &RenderContext, state: &LoadState<AuthorDetail>) -> String {
    let back = link_to(
        &ctx.config,
        &Route::Authors.path(),
        &format!("← {}", html_escape(&ctx.i18n.get("back"))),
        Some("back"),
    );
    let body = render_state(
        ctx,
        state,
        "status.author_not_found",
        "status.author_not_found",
        |detail| {
            let author = &detail.author;
            let mut html = format!(
                r#"<section class="profile">{}<h1 class="page-heading">{}</h1><p class="author-bio">{}</p>{}</section>"#,
                avatar_tag(&ctx.config, &author.avatar, &author.name, "lg"),
                html_escape(&author.name),
                html_escape(&author.bio),
                social_links(ctx, author)
            );

            if !author.publications.is_empty() {
                html.push_str(&section_heading(&ctx.i18n.get("author.publications")));
                html.push_str(r#"<ul class="publications">"#);
                for publication in &author.publications {
                    html.push_str(&publication_item(publication));
                }
                html.push_str("</ul>");
            }

            if !detail.posts.is_empty() {
                html.push_str(&section_heading(&ctx.i18n.get("author.recent_posts")));
                html.push_str(r#"<ul class="post-list">"#);
                for post in &detail.posts {
                    let route = Route::BlogPost {
                        id: post.id.clone(),
                    };
                    html.push_str(&format!(
                        r#"<li class="post-item">{}<p class="post-summary">{}</p>{}{}</li>"#,
                        link_to(
                            &ctx.config,
                            &route.path(),
                            &html_escape(&post.title),
                            Some("post-title")
                        ),
                        html_escape(&post.summary),
                        post_meta(ctx, post),
                        tag_list(&post.tags)
                    ));
                }
                html.push_str("</ul>");
            }

            html
        },
    );
    back + &body
}

/// Icon-style links for each present social link
pub(super) fn social_links(ctx: &RenderContext, author: &Author) -> String {
    let links = author.links.present();
    if links.is_empty() {
        return String::new();
    }
    let items: String = links
        .into_iter()
        .map(|(label, url)| {
            format!(
                r#"<a class="social-link" href="{}" target="_blank" rel="noopener noreferrer" aria-label="{}" title="{}">{}</a>"#,
                html_escape(&link_url(ctx, url)),
                label,
                label,
                label
            )
        })
        .collect();
    format!(r#"<div class="social">{}</div>"#, items)
}

fn link_url(ctx: &RenderContext, url: &str) -> String {
    if crate::helpers::is_external(url) {
        url.to_string()
    } else {
        crate::helpers::url_for(&ctx.config, url)
    }
}

fn section_heading(text: &str) -> String {
    format!(r#"<h2 class="section-heading">{}</h2>"#, html_escape(text))
}

fn publication_item(publication: &Publication) -> String {
    let title = match publication.doi_url() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(&url),
            html_escape(&publication.title)
        ),
        None => html_escape(&publication.title),
    };

    let mut venue = Vec::new();
    for part in [&publication.authors, &publication.journal, &publication.year] {
        if !part.is_empty() {
            venue.push(html_escape(part));
        }
    }

    let doi = if publication.doi.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="publication-doi">DOI: {}</span>"#,
            html_escape(&publication.doi)
        )
    };

    format!(
        r#"<li class="publication"><span class="publication-title">{}</span><span class="publication-venue">{}</span>{}</li>"#,
        title,
        venue.join(" · "),
        doi
    )
}

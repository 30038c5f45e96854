//! Author directory page

use super::render_state;
use crate::content::{Author, LoadState};
use crate::helpers::{avatar_tag, html_escape, link_to};
use crate::router::Route;
use crate::RenderContext;

pub(super) fn render(ctx: &RenderContext, state: &LoadState<Vec<Author>>) -> String {
    let heading = format!(
        r#"<h1 class="page-heading">{}</h1>"#,
        html_escape(&ctx.i18n.get("authors.heading"))
    );
    let body = render_state(
        ctx,
        state,
        "status.no_authors",
        "status.no_authors",
        |authors| {
            let cards: String = authors.iter().map(|a| card(ctx, a)).collect();
            format!(r#"<div class="author-grid">{}</div>"#, cards)
        },
    );
    heading + &body
}

// Social links sit beside the profile link, never inside it.
fn card(ctx: &RenderContext, author: &Author) -> String {
    let route = Route::Author {
        id: author.id.clone(),
    };
    let profile = format!(
        r#"{}<h2 class="author-name">{}</h2><p class="author-bio">{}</p>"#,
        avatar_tag(&ctx.config, &author.avatar, &author.name, "md"),
        html_escape(&author.name),
        html_escape(&author.bio)
    );
    format!(
        r#"<div class="author-card">{}{}</div>"#,
        link_to(&ctx.config, &route.path(), &profile, Some("author-link")),
        super::author::social_links(ctx, author)
    )
}

//! CLI operations

pub mod check;
pub mod clean;
pub mod export;
pub mod list;

use anyhow::Result;
use std::sync::Arc;

use crate::navigation::Session;
use crate::Site;

/// Render the full document for one path
///
/// Returns the HTML and whether the path resolved to a page.
pub async fn render(site: Arc<Site>, path: &str) -> Result<(String, bool)> {
    let mut session = Session::new(site);
    session.navigate(path);
    if let Some(query) = query_term(path) {
        session.search(&query);
    }
    let view = session.settled().await;
    Ok((session.render(), !view.page.is_not_found()))
}

/// The `q` parameter of a path's query string
fn query_term(path: &str) -> Option<String> {
    let query = path.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or_default();
    crate::helpers::query_param(query, "q")
}

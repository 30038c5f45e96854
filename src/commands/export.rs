//! Export every page as static HTML

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::loader;
use crate::helpers::decode_segment;
use crate::pages::{render_document, Page};
use crate::router::Route;
use crate::Site;

/// Render every route into `<public>/<path>/index.html` and copy local content
pub async fn run(site: &Site) -> Result<()> {
    let posts = loader::load_posts(&site.store)
        .await
        .context("failed to load the post index")?;
    let authors = loader::load_authors(&site.store)
        .await
        .context("failed to load the author directory")?;

    let mut routes: Vec<Route> = Route::static_routes().into();
    routes.extend(posts.iter().map(|p| Route::BlogPost { id: p.id.clone() }));
    routes.extend(authors.iter().map(|a| Route::Author { id: a.id.clone() }));

    fs::create_dir_all(&site.public_dir)?;

    let mut count = 0;
    for route in &routes {
        let Some(output_path) = output_file(&site.public_dir, route) else {
            tracing::warn!("Skipping {}: id is not a usable directory name", route.path());
            continue;
        };

        let page = Page::load(Some(route), &site.store, &site.ctx.markdown).await;
        let html = render_document(&site.ctx, &route.path(), Some(route), &page, "");
        write(&output_path, &html)?;
        tracing::debug!("Exported: {:?}", output_path);
        count += 1;
    }

    let not_found = render_document(&site.ctx, "/404", None, &Page::Unmatched, "");
    write(&site.public_dir.join("404.html"), &not_found)?;

    match site.store.local_root() {
        Some(root) => copy_content(root, &site.public_dir.join("content"))?,
        None => tracing::info!("Content is remote, not copying it"),
    }

    tracing::info!("Exported {} pages to {:?}", count, site.public_dir);
    Ok(())
}

/// `<public>/<decoded segments>/index.html`, or `None` if a segment would escape
fn output_file(public_dir: &Path, route: &Route) -> Option<PathBuf> {
    let mut path = public_dir.to_path_buf();
    for segment in route.path().split('/').filter(|s| !s.is_empty()) {
        let segment = decode_segment(segment)?;
        if segment == "." || segment == ".." || segment.contains(['/', '\\']) {
            return None;
        }
        path.push(segment);
    }
    path.push("index.html");
    Some(path)
}

fn write(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write {:?}", path))
}

fn copy_content(source_dir: &Path, dest_dir: &Path) -> Result<()> {
    let mut copied = 0;
    for entry in WalkDir::new(source_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(source_dir)?;
        let dest = dest_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)?;
        copied += 1;
    }

    tracing::debug!("Copied {} content files", copied);
    Ok(())
}

//! List site content

use anyhow::Result;

use crate::content::loader;
use crate::router::Route;
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = loader::load_posts(&site.store).await?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} by {} [{}]",
                    post.date, post.title, post.author_name, post.id
                );
            }
        }
        "author" | "authors" => {
            let (authors, posts) = tokio::try_join!(
                loader::load_authors(&site.store),
                loader::load_posts(&site.store)
            )?;
            println!("Authors ({}):", authors.len());
            for author in authors {
                let count = posts.iter().filter(|p| p.author_id == author.id).count();
                println!(
                    "  {} [{}] - {} posts, {} publications",
                    author.name,
                    author.id,
                    count,
                    author.publications.len()
                );
            }
        }
        "route" | "routes" => {
            let (authors, posts) = tokio::try_join!(
                loader::load_authors(&site.store),
                loader::load_posts(&site.store)
            )?;
            let routes = Route::static_routes()
                .into_iter()
                .chain(posts.into_iter().map(|p| Route::BlogPost { id: p.id }))
                .chain(authors.into_iter().map(|a| Route::Author { id: a.id }));
            for route in routes {
                println!("  {}", route.path());
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, authors, routes",
                content_type
            );
        }
    }

    Ok(())
}

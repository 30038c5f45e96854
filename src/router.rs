//! Route table
//!
//! ```text
//! /                 Home
//! /about            About
//! /blog             BlogList
//! /blog/post/:id    BlogPost
//! /authors          Authors
//! /author/:id       Author
//! ```
//!
//! There is no catch-all: anything else resolves to `None`.

use crate::helpers::{decode_segment, encode_segment};

/// A routed page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    BlogList,
    BlogPost { id: String },
    Authors,
    Author { id: String },
}

impl Route {
    /// Resolve a request path (relative to the site root) to a route
    ///
    /// Query strings and fragments are ignored, one trailing slash is
    /// tolerated, and ids are percent-decoded.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_prefix('/')?;
        let path = path.strip_suffix('/').unwrap_or(path);

        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["about"] => Some(Route::About),
            ["blog"] => Some(Route::BlogList),
            ["blog", "post", id] => Some(Route::BlogPost { id: decode_id(id)? }),
            ["authors"] => Some(Route::Authors),
            ["author", id] => Some(Route::Author { id: decode_id(id)? }),
            _ => None,
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::BlogList => "/blog".to_string(),
            Route::BlogPost { id } => format!("/blog/post/{}", encode_segment(id)),
            Route::Authors => "/authors".to_string(),
            Route::Author { id } => format!("/author/{}", encode_segment(id)),
        }
    }

    /// First path segment, `home` for the root
    pub fn section(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::BlogList | Route::BlogPost { .. } => "blog",
            Route::Authors => "authors",
            Route::Author { .. } => "author",
        }
    }

    /// Routes that exist regardless of content
    pub fn static_routes() -> [Route; 4] {
        [Route::Home, Route::About, Route::BlogList, Route::Authors]
    }
}

fn decode_id(segment: &str) -> Option<String> {
    decode_segment(segment).filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_route_surface() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve("/about"), Some(Route::About));
        assert_eq!(Route::resolve("/blog"), Some(Route::BlogList));
        assert_eq!(
            Route::resolve("/blog/post/a1"),
            Some(Route::BlogPost { id: "a1".to_string() })
        );
        assert_eq!(Route::resolve("/authors"), Some(Route::Authors));
        assert_eq!(
            Route::resolve("/author/u1"),
            Some(Route::Author { id: "u1".to_string() })
        );
    }

    #[test]
    fn test_resolve_tolerates_trailing_slash_and_query() {
        assert_eq!(Route::resolve("/blog/"), Some(Route::BlogList));
        assert_eq!(Route::resolve("/blog?q=tea"), Some(Route::BlogList));
        assert_eq!(
            Route::resolve("/author/u1/#posts"),
            Some(Route::Author { id: "u1".to_string() })
        );
    }

    #[test]
    fn test_resolve_unmatched() {
        for path in [
            "",
            "blog",
            "/missing",
            "/blog/post",
            "/blog/post/",
            "/blog/a1",
            "/author",
            "/author//",
            "/author/u1/extra",
            "/authors/u1",
            "/blog//",
        ] {
            assert_eq!(Route::resolve(path), None, "{}", path);
        }
    }

    #[test]
    fn test_path_round_trip_with_encoded_ids() {
        let route = Route::BlogPost {
            id: "hello world/2".to_string(),
        };
        assert_eq!(route.path(), "/blog/post/hello%20world%2F2");
        assert_eq!(Route::resolve(&route.path()), Some(route));
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::Home.section(), "home");
        assert_eq!(Route::BlogPost { id: "a".into() }.section(), "blog");
        assert_eq!(Route::Author { id: "u".into() }.section(), "author");
    }
}

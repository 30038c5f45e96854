//! Content module - the records served by the content store
//!
//! Everything here is a read-only snapshot deserialized from
//! `authors.json` and `blogs/index.json`; nothing is written back.

pub mod check;
pub mod loader;
mod markdown;
pub mod search;
pub mod store;

pub use loader::{AuthorDetail, LoadError, LoadState, PostDetail};
pub use markdown::{strip_leading_heading, MarkdownRenderer};
pub use store::{ContentStore, FetchError, FsStore, HttpStore, Store};

use serde::{Deserialize, Deserializer, Serialize};

/// Path of the author directory inside the content store
pub const AUTHORS_PATH: &str = "authors.json";

/// Path of the post index inside the content store
pub const POST_INDEX_PATH: &str = "blogs/index.json";

/// Path of a post's Markdown body inside the content store
pub fn post_body_path(file_name: &str) -> String {
    format!("blogs/{}", file_name.trim_start_matches('/'))
}

/// A site author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub links: AuthorLinks,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

/// Optional profile links of an author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorLinks {
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub orcid: Option<String>,
}

impl AuthorLinks {
    /// Present links as `(label, url)`, in display order; empty strings count as absent
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("Twitter", &self.twitter),
            ("Website", &self.website),
            ("ORCID", &self.orcid),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

/// A publication listed on an author's page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub doi: String,
}

impl Publication {
    /// Resolver URL of the DOI
    pub fn doi_url(&self) -> Option<String> {
        if self.doi.is_empty() {
            None
        } else {
            Some(format!("https://doi.org/{}", self.doi))
        }
    }
}

/// Summary of a post as listed in the post index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: String,
    pub file_name: String,
}

/// `authors.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorDirectory {
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl AuthorDirectory {
    /// Linear scan for an author by id
    pub fn find(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }
}

/// `blogs/index.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostIndex {
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

impl PostIndex {
    /// Linear scan for a post by id
    pub fn find(&self, id: &str) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts written by `author_id`, in index order
    pub fn by_author(&self, author_id: &str) -> Vec<PostSummary> {
        self.posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }
}

/// Accept `2021` as well as `"2021"`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORS: &str = r#"{
        "authors": [
            {
                "id": "u1",
                "name": "Alice",
                "bio": "Writes things.",
                "avatar": "/avatars/alice.png",
                "links": { "github": "https://github.com/alice", "orcid": "" },
                "publications": [
                    { "title": "On Ponds", "authors": "Alice, Bob", "journal": "Nature", "year": 2021, "doi": "10.1000/xyz" }
                ]
            },
            { "id": "u2", "name": "Bob", "bio": "", "avatar": "", "links": {} }
        ]
    }"#;

    const POSTS: &str = r#"{
        "posts": [
            {
                "id": "a1", "title": "Hello", "summary": "s", "date": "2024-01-01",
                "tags": ["x"], "authorId": "u1", "authorName": "Alice",
                "authorAvatar": "/avatars/alice.png", "fileName": "hello.md"
            },
            { "id": "a2", "title": "Second", "authorId": "u2", "fileName": "second.md" }
        ]
    }"#;

    #[test]
    fn test_parse_authors() {
        let dir: AuthorDirectory = serde_json::from_str(AUTHORS).unwrap();
        assert_eq!(dir.authors.len(), 2);

        let alice = dir.find("u1").unwrap();
        assert_eq!(alice.publications[0].year, "2021");
        assert_eq!(
            alice.publications[0].doi_url().as_deref(),
            Some("https://doi.org/10.1000/xyz")
        );
        // Empty ORCID is treated as absent
        assert_eq!(alice.links.present(), vec![("GitHub", "https://github.com/alice")]);

        let bob = dir.find("u2").unwrap();
        assert!(bob.publications.is_empty());
        assert!(bob.links.present().is_empty());
        assert!(dir.find("u3").is_none());
    }

    #[test]
    fn test_parse_posts() {
        let index: PostIndex = serde_json::from_str(POSTS).unwrap();
        let hello = index.find("a1").unwrap();
        assert_eq!(hello.author_id, "u1");
        assert_eq!(hello.file_name, "hello.md");
        assert_eq!(hello.tags, vec!["x"]);

        let second = index.find("a2").unwrap();
        assert!(second.tags.is_empty());
        assert_eq!(second.summary, "");

        assert_eq!(index.by_author("u1").len(), 1);
        assert!(index.by_author("nobody").is_empty());
    }

    #[test]
    fn test_post_body_path() {
        assert_eq!(post_body_path("hello.md"), "blogs/hello.md");
        assert_eq!(post_body_path("/nested/x.md"), "blogs/nested/x.md");
    }
}

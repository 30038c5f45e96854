//! Content loader - the read-only fetches behind each page
//!
//! Every page's data goes through one of the `load_*` functions below and
//! ends up in a [`LoadState`]. Nothing is cached: each call fetches fresh.

use thiserror::Error;

use super::store::{fetch_json, ContentStore, FetchError};
use super::{
    post_body_path, strip_leading_heading, Author, AuthorDirectory, MarkdownRenderer, PostIndex,
    PostSummary, AUTHORS_PATH, POST_INDEX_PATH,
};

/// Why a load did not produce data
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested id is absent from its index
    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: String },

    /// A fetch or parse failed
    #[error(transparent)]
    Failure(#[from] FetchError),
}

/// State of a page's data
///
/// A page starts in `Loading` and moves to exactly one terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// A list page whose collection is empty
    Empty,
    /// A detail page whose id is absent
    NotFound,
    /// Load failure, carrying the cause
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether the load has finished
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    /// The loaded data, if ready
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Map a detail-page result
    pub fn from_result(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(LoadError::NotFound { .. }) => LoadState::NotFound,
            Err(LoadError::Failure(e)) => LoadState::Failed(e.to_string()),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Map a list-page result; an empty collection becomes `Empty`
    pub fn from_list(result: Result<Vec<T>, LoadError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            other => LoadState::from_result(other),
        }
    }
}

/// A post with its rendered body
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub summary: PostSummary,
    /// Markdown body with the leading heading removed
    pub markdown: String,
    pub html: String,
}

/// An author with the posts they wrote
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDetail {
    pub author: Author,
    pub posts: Vec<PostSummary>,
}

/// Load the author directory
pub async fn load_authors<S: ContentStore>(store: &S) -> Result<Vec<Author>, LoadError> {
    let directory: AuthorDirectory = fetch_json(store, AUTHORS_PATH).await?;
    tracing::debug!("Loaded {} authors", directory.authors.len());
    Ok(directory.authors)
}

/// Load the post index
pub async fn load_posts<S: ContentStore>(store: &S) -> Result<Vec<PostSummary>, LoadError> {
    let index: PostIndex = fetch_json(store, POST_INDEX_PATH).await?;
    tracing::debug!("Loaded {} posts", index.posts.len());
    Ok(index.posts)
}

/// Load one post: index lookup, then its Markdown body
///
/// An unknown id stops after the index fetch.
pub async fn load_post<S: ContentStore>(
    store: &S,
    renderer: &MarkdownRenderer,
    id: &str,
) -> Result<PostDetail, LoadError> {
    let index: PostIndex = fetch_json(store, POST_INDEX_PATH).await?;
    let summary = index.find(id).cloned().ok_or_else(|| LoadError::NotFound {
        kind: "post",
        id: id.to_string(),
    })?;

    let body = store.fetch(&post_body_path(&summary.file_name)).await?;
    let markdown = strip_leading_heading(&body);
    let html = renderer.render(&markdown);

    Ok(PostDetail {
        summary,
        markdown,
        html,
    })
}

/// Load one author and exactly the posts attributed to them
///
/// The author directory and the post index are fetched concurrently and
/// joined once both arrive.
pub async fn load_author<S: ContentStore>(store: &S, id: &str) -> Result<AuthorDetail, LoadError> {
    let (directory, index) = tokio::try_join!(
        fetch_json::<_, AuthorDirectory>(store, AUTHORS_PATH),
        fetch_json::<_, PostIndex>(store, POST_INDEX_PATH),
    )?;

    let author = directory.find(id).cloned().ok_or_else(|| LoadError::NotFound {
        kind: "author",
        id: id.to_string(),
    })?;
    let posts = index.by_author(id);

    Ok(AuthorDetail { author, posts })
}

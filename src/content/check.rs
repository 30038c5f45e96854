//! Content validation
//!
//! The site never validates content while serving pages; a dangling
//! `authorId` just renders an author link that leads to "not found". This
//! module reports such problems up front.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

use super::store::{fetch_json, ContentStore};
use super::{
    post_body_path, AuthorDirectory, LoadError, PostIndex, AUTHORS_PATH, POST_INDEX_PATH,
};

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The site renders something broken
    Error,
    /// Suspicious but harmless
    Warning,
}

/// A single problem found in the content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", tag, self.message)
    }
}

/// Check the indices and every referenced Markdown file
///
/// Fails only when an index itself cannot be loaded.
pub async fn check_content<S: ContentStore>(store: &S) -> Result<Vec<Issue>, LoadError> {
    let directory: AuthorDirectory = fetch_json(store, AUTHORS_PATH).await?;
    let index: PostIndex = fetch_json(store, POST_INDEX_PATH).await?;

    let mut issues = Vec::new();

    let mut author_ids = HashSet::new();
    for author in &directory.authors {
        if !author_ids.insert(author.id.as_str()) {
            issues.push(Issue::warning(format!("duplicate author id `{}`", author.id)));
        }
    }

    let mut post_ids = HashSet::new();
    for post in &index.posts {
        if !post_ids.insert(post.id.as_str()) {
            issues.push(Issue::warning(format!("duplicate post id `{}`", post.id)));
        }

        match directory.find(&post.author_id) {
            None => issues.push(Issue::error(format!(
                "post `{}` references unknown author `{}`",
                post.id, post.author_id
            ))),
            Some(author) if !post.author_name.is_empty() && author.name != post.author_name => {
                issues.push(Issue::warning(format!(
                    "post `{}` lists author name `{}` but author `{}` is named `{}`",
                    post.id, post.author_name, author.id, author.name
                )))
            }
            Some(_) => {}
        }

        if NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").is_err() {
            issues.push(Issue::warning(format!(
                "post `{}` has date `{}`, expected YYYY-MM-DD",
                post.id, post.date
            )));
        }

        if let Err(e) = store.fetch(&post_body_path(&post.file_name)).await {
            issues.push(Issue::error(format!(
                "post `{}` body is unavailable: {}",
                post.id, e
            )));
        }
    }

    tracing::debug!(
        "Checked {} authors and {} posts, {} issues",
        directory.authors.len(),
        index.posts.len(),
        issues.len()
    );

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::testing::MemoryStore;

    #[tokio::test]
    async fn test_clean_content_has_no_issues() {
        let store = MemoryStore::new()
            .with(AUTHORS_PATH, r#"{"authors": [{"id": "u1", "name": "Alice"}]}"#)
            .with(
                POST_INDEX_PATH,
                r#"{"posts": [{"id": "a1", "title": "Hello", "date": "2024-01-01",
                    "authorId": "u1", "authorName": "Alice", "fileName": "hello.md"}]}"#,
            )
            .with("blogs/hello.md", "# Hello");

        assert!(check_content(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reports_problems() {
        let store = MemoryStore::new()
            .with(
                AUTHORS_PATH,
                r#"{"authors": [{"id": "u1", "name": "Alice"}, {"id": "u1", "name": "Alias"}]}"#,
            )
            .with(
                POST_INDEX_PATH,
                r#"{"posts": [
                    {"id": "a1", "title": "Hello", "date": "Jan 1", "authorId": "u1",
                     "authorName": "Alicia", "fileName": "hello.md"},
                    {"id": "a1", "title": "Again", "date": "2024-01-02", "authorId": "u9",
                     "fileName": "again.md"}
                ]}"#,
            )
            .with("blogs/hello.md", "# Hello");

        let issues = check_content(&store).await.unwrap();
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        let warnings = issues.len() - errors.len();

        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("unknown author `u9`"));
        assert!(errors[1].contains("again.md"));
        // duplicate author, duplicate post, name mismatch, bad date
        assert_eq!(warnings, 4);
    }

    #[tokio::test]
    async fn test_missing_index_is_an_error() {
        let store = MemoryStore::new().with(AUTHORS_PATH, r#"{"authors": []}"#);
        assert!(matches!(
            check_content(&store).await,
            Err(LoadError::Failure(_))
        ));
    }

    #[test]
    fn test_display() {
        let issue = Issue::error("broken".to_string());
        assert_eq!(issue.to_string(), "error: broken");
    }
}

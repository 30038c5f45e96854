//! Blog list search

use super::PostSummary;

/// Whether `post` matches `term` (case-insensitive substring of title, summary or any tag)
pub fn matches(post: &PostSummary, term: &str) -> bool {
    matches_lowered(post, &term.to_lowercase())
}

/// Posts matching `term`, in their original order
///
/// Pure and synchronous; the empty term matches every post.
pub fn filter_posts<'a>(posts: &'a [PostSummary], term: &str) -> Vec<&'a PostSummary> {
    let term = term.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_lowered(post, &term))
        .collect()
}

/// Lowercased searchable text of a post, one field per line
///
/// The browser filters on every keystroke with a plain substring test over
/// this text. A search box cannot produce a newline, so matches never span
/// two fields.
pub fn haystack(post: &PostSummary) -> String {
    let mut fields = vec![post.title.to_lowercase(), post.summary.to_lowercase()];
    fields.extend(post.tags.iter().map(|t| t.to_lowercase()));
    fields.join("\n")
}

fn matches_lowered(post: &PostSummary, term: &str) -> bool {
    post.title.to_lowercase().contains(term)
        || post.summary.to_lowercase().contains(term)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

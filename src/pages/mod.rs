//! Pages - what each route shows
//!
//! A [`Page`] pairs a route with the [`LoadState`] of its data. Pages are
//! built in two steps: [`Page::loading`] when the route is mounted, then
//! [`Page::load`] once the content store has answered.

mod author;
mod authors;
mod blog;
pub mod container;
mod layout;
mod static_page;

pub use container::{MaxWidth, PageContainer, Transition, TRANSITION_SCRIPT};
pub use layout::render_document;

use crate::content::loader::{self, AuthorDetail, LoadError, LoadState, PostDetail};
use crate::content::{Author, ContentStore, MarkdownRenderer, PostSummary};
use crate::helpers::html_escape;
use crate::router::Route;
use crate::RenderContext;

/// A mounted page and the state of its data
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    About,
    BlogList(LoadState<Vec<PostSummary>>),
    BlogPost(LoadState<PostDetail>),
    Authors(LoadState<Vec<Author>>),
    Author(LoadState<AuthorDetail>),
    /// No route matched the path
    Unmatched,
}

impl Page {
    /// The page as first shown, before any data arrives
    pub fn loading(route: Option<&Route>) -> Self {
        match route {
            None => Page::Unmatched,
            Some(Route::Home) => Page::Home,
            Some(Route::About) => Page::About,
            Some(Route::BlogList) => Page::BlogList(LoadState::Loading),
            Some(Route::BlogPost { .. }) => Page::BlogPost(LoadState::Loading),
            Some(Route::Authors) => Page::Authors(LoadState::Loading),
            Some(Route::Author { .. }) => Page::Author(LoadState::Loading),
        }
    }

    /// Run the route's loads and return the settled page
    pub async fn load<S: ContentStore>(
        route: Option<&Route>,
        store: &S,
        markdown: &MarkdownRenderer,
    ) -> Self {
        let Some(route) = route else {
            return Page::Unmatched;
        };

        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::BlogList => {
                let result = logged(route, loader::load_posts(store).await);
                Page::BlogList(LoadState::from_list(result))
            }
            Route::BlogPost { id } => {
                let result = logged(route, loader::load_post(store, markdown, id).await);
                Page::BlogPost(LoadState::from_result(result))
            }
            Route::Authors => {
                let result = logged(route, loader::load_authors(store).await);
                Page::Authors(LoadState::from_list(result))
            }
            Route::Author { id } => {
                let result = logged(route, loader::load_author(store, id).await);
                Page::Author(LoadState::from_result(result))
            }
        }
    }

    /// Whether every load of the page has finished
    pub fn is_settled(&self) -> bool {
        match self {
            Page::Home | Page::About | Page::Unmatched => true,
            Page::BlogList(state) => state.is_settled(),
            Page::BlogPost(state) => state.is_settled(),
            Page::Authors(state) => state.is_settled(),
            Page::Author(state) => state.is_settled(),
        }
    }

    /// Unmatched routes and detail pages whose id is unknown
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Page::Unmatched
                | Page::BlogPost(LoadState::NotFound)
                | Page::Author(LoadState::NotFound)
        )
    }

    /// Width preset of the page container
    pub fn max_width(&self) -> MaxWidth {
        match self {
            Page::Home | Page::About => MaxWidth::Sm,
            Page::BlogList(_) => MaxWidth::Lg,
            _ => MaxWidth::Md,
        }
    }

    /// Document title
    pub fn title(&self, ctx: &RenderContext) -> String {
        let site = &ctx.config.title;
        let page = match self {
            Page::Home => return site.clone(),
            Page::About => ctx.config.about.heading.clone(),
            Page::BlogList(_) => ctx.i18n.get("nav.blog"),
            Page::BlogPost(state) => state
                .ready()
                .map(|d| d.summary.title.clone())
                .unwrap_or_else(|| ctx.i18n.get("nav.blog")),
            Page::Authors(_) => ctx.i18n.get("authors.heading"),
            Page::Author(state) => state
                .ready()
                .map(|d| d.author.name.clone())
                .unwrap_or_else(|| ctx.i18n.get("nav.authors")),
            Page::Unmatched => ctx.i18n.get("status.page_not_found"),
        };
        format!("{} - {}", page, site)
    }

    /// Inner HTML of the page container; `query` is the blog search term
    pub fn render_body(&self, ctx: &RenderContext, query: &str) -> String {
        match self {
            Page::Home => static_page::render(&ctx.config.home),
            Page::About => static_page::render(&ctx.config.about),
            Page::BlogList(state) => blog::render_list(ctx, state, query),
            Page::BlogPost(state) => blog::render_post(ctx, state),
            Page::Authors(state) => authors::render(ctx, state),
            Page::Author(state) => author::render(ctx, state),
            Page::Unmatched => String::new(),
        }
    }
}

fn logged<T>(route: &Route, result: Result<T, LoadError>) -> Result<T, LoadError> {
    match &result {
        Err(LoadError::Failure(e)) => tracing::warn!("Failed to load {}: {}", route.path(), e),
        Err(e @ LoadError::NotFound { .. }) => tracing::debug!("{}", e),
        Ok(_) => {}
    }
    result
}

/// Render the non-ready states of a load; `ready` renders the data
fn render_state<T>(
    ctx: &RenderContext,
    state: &LoadState<T>,
    empty_key: &str,
    not_found_key: &str,
    ready: impl FnOnce(&T) -> String,
) -> String {
    match state {
        LoadState::Loading => status(&ctx.i18n.get("status.loading"), false),
        LoadState::Failed(cause) => status(&ctx.i18n.format("status.load_failed", cause), true),
        LoadState::Empty => status(&ctx.i18n.get(empty_key), false),
        LoadState::NotFound => status(&ctx.i18n.get(not_found_key), true),
        LoadState::Ready(data) => ready(data),
    }
}

fn status(text: &str, error: bool) -> String {
    format!(
        r#"<p class="status{}">{}</p>"#,
        if error { " error" } else { "" },
        html_escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::testing::MemoryStore;
    use crate::content::{AUTHORS_PATH, POST_INDEX_PATH};

    const AUTHORS: &str = r#"{"authors": [
        {"id": "u1", "name": "Alice", "bio": "Watches ponds.", "avatar": "/a.png",
         "links": {"github": "https://github.com/alice", "website": "https://alice.dev"},
         "publications": [{"title": "Ripples", "authors": "Alice", "journal": "Water", "year": 2020, "doi": "10.1/r"}]},
        {"id": "u2", "name": "Bob", "bio": "Drinks tea.", "avatar": "", "links": {}}
    ]}"#;

    const POSTS: &str = r#"{"posts": [
        {"id": "a1", "title": "Hello", "summary": "s", "date": "2024-01-01", "tags": ["x"],
         "authorId": "u1", "authorName": "Alice", "authorAvatar": "/a.png", "fileName": "hello.md"},
        {"id": "a2", "title": "Tea <3", "summary": "leaves", "date": "2024-02-01", "tags": ["drinks"],
         "authorId": "u2", "authorName": "Bob", "authorAvatar": "", "fileName": "tea.md"}
    ]}"#;

    fn ctx() -> RenderContext {
        RenderContext::default()
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with(AUTHORS_PATH, AUTHORS)
            .with(POST_INDEX_PATH, POSTS)
            .with("blogs/hello.md", "# Hello\n\nWelcome to the **pond**.")
    }

    async fn load(path: &str, store: &MemoryStore, ctx: &RenderContext) -> Page {
        Page::load(Route::resolve(path).as_ref(), store, &ctx.markdown).await
    }

    #[tokio::test]
    async fn test_author_page_renders_name_and_bio() {
        let ctx = ctx();
        let store = store();
        for (id, name, bio) in [("u1", "Alice", "Watches ponds."), ("u2", "Bob", "Drinks tea.")] {
            let page = load(&format!("/author/{}", id), &store, &ctx).await;
            let html = page.render_body(&ctx, "");
            assert!(html.contains(name), "{}", html);
            assert!(html.contains(bio), "{}", html);
        }
    }

    #[tokio::test]
    async fn test_author_page_sections() {
        let ctx = ctx();
        let page = load("/author/u1", &store(), &ctx).await;
        let html = page.render_body(&ctx, "");

        assert!(html.contains(r#"href="https://github.com/alice""#));
        assert!(html.contains(r#"aria-label="Website""#));
        assert!(!html.contains("Twitter"));
        assert!(html.contains("https://doi.org/10.1/r"));
        assert!(html.contains(r#"<span class="publication-doi">DOI: 10.1/r</span>"#));
        assert!(html.contains("出版物"));
        assert!(html.contains("最近的文章"));
        assert!(html.contains(r#"href="/blog/post/a1""#));
        assert!(!html.contains(r#"href="/blog/post/a2""#));
        assert!(html.contains(r#"href="/authors""#));
    }

    #[tokio::test]
    async fn test_unknown_author_is_not_found() {
        let ctx = ctx();
        let store = store();
        let page = load("/author/nobody", &store, &ctx).await;

        assert_eq!(page, Page::Author(LoadState::NotFound));
        assert!(page.is_not_found());
        assert!(page.render_body(&ctx, "").contains("作者未找到"));
        assert!(store.fetched().iter().all(|p| !p.ends_with(".md")));
    }

    #[tokio::test]
    async fn test_blog_post_end_to_end() {
        let ctx = ctx();
        let store = store();
        let page = load("/blog/post/a1", &store, &ctx).await;
        let html = page.render_body(&ctx, "");

        assert!(html.contains(r#"<h1 class="post-heading">Hello</h1>"#));
        assert!(html.contains("<strong>pond</strong>"));
        assert!(html.contains(r#"href="/author/u1""#));
        assert!(store.fetched().contains(&"blogs/hello.md".to_string()));
        assert_eq!(page.title(&ctx), "Hello - 青萍之末");
    }

    #[tokio::test]
    async fn test_blog_post_states() {
        let ctx = ctx();
        let missing = load("/blog/post/zzz", &store(), &ctx).await;
        assert!(missing.render_body(&ctx, "").contains("文章未找到"));

        let broken = load("/blog/post/a2", &store(), &ctx).await;
        let html = broken.render_body(&ctx, "");
        assert!(html.contains("加载失败: "));
        assert!(html.contains("blogs/tea.md"));
    }

    #[tokio::test]
    async fn test_blog_list_filters_by_query() {
        let ctx = ctx();
        let page = load("/blog", &store(), &ctx).await;

        let all = page.render_body(&ctx, "");
        assert_eq!(all.matches(r#"class="post-item""#).count(), 2);
        assert!(!all.contains("post-item\" hidden"));
        assert!(all.contains("Tea &lt;3"));

        let filtered = page.render_body(&ctx, "DRINK");
        assert_eq!(filtered.matches(r#"class="post-item" hidden"#).count(), 1);
        assert!(filtered.contains(r#"value="DRINK""#));
        assert!(filtered.contains("data-no-match hidden"));

        let none = page.render_body(&ctx, "zzz");
        assert_eq!(none.matches(r#"class="post-item" hidden"#).count(), 2);
        assert!(none.contains(r#"<p class="status" data-no-match>"#));
    }

    #[tokio::test]
    async fn test_list_pages_empty_and_failed() {
        let ctx = ctx();
        let store = MemoryStore::new().with(AUTHORS_PATH, r#"{"authors": []}"#);

        let authors = load("/authors", &store, &ctx).await;
        assert_eq!(authors, Page::Authors(LoadState::Empty));
        assert!(authors.render_body(&ctx, "").contains("暂无作者信息"));

        let blog = load("/blog", &store, &ctx).await;
        assert!(matches!(blog, Page::BlogList(LoadState::Failed(_))));
        assert!(blog.render_body(&ctx, "").contains(r#"class="status error""#));
    }

    #[tokio::test]
    async fn test_authors_page_cards() {
        let ctx = ctx();
        let page = load("/authors", &store(), &ctx).await;
        let html = page.render_body(&ctx, "");
        assert!(html.contains("作者列表"));
        assert_eq!(html.matches(r#"class="author-card""#).count(), 2);
        assert!(html.contains(r#"href="/author/u2""#));
    }

    #[test]
    fn test_loading_states() {
        let ctx = ctx();
        let page = Page::loading(Route::resolve("/authors").as_ref());
        assert!(!page.is_settled());
        assert!(page.render_body(&ctx, "").contains("加载中..."));

        assert!(Page::loading(Route::resolve("/about").as_ref()).is_settled());
        assert_eq!(Page::loading(None), Page::Unmatched);
        assert!(Page::Unmatched.render_body(&ctx, "").is_empty());
    }

    #[test]
    fn test_static_pages_use_config_text() {
        let ctx = ctx();
        let html = Page::About.render_body(&ctx, "");
        assert!(html.contains("关于我们"));
        assert_eq!(Page::About.max_width(), MaxWidth::Sm);
        assert_eq!(Page::BlogList(LoadState::Loading).max_width(), MaxWidth::Lg);
        assert_eq!(Page::BlogPost(LoadState::Loading).max_width(), MaxWidth::Md);
    }
}

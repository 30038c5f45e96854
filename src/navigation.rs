//! Navigation sessions
//!
//! A [`Session`] mounts one page at a time. Navigating cancels the load of
//! the page being left, shows the new page in its loading state, and runs
//! its loads in the background. Results are applied only while the load's
//! page is still the one mounted.

use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::content::{ContentStore, Store};
use crate::pages::{render_document, Page, Transition};
use crate::router::Route;
use crate::Site;

/// What a session currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Transition key: the canonical path of the mounted page
    pub key: String,
    /// `None` when the path matched no route
    pub route: Option<Route>,
    pub page: Page,
    /// Blog search term
    pub query: String,
    /// Bumped on every mount; zero before the first
    pub generation: u64,
}

impl View {
    fn blank() -> Self {
        Self {
            key: String::new(),
            route: None,
            page: Page::Unmatched,
            query: String::new(),
            generation: 0,
        }
    }
}

/// One visitor's navigation state
pub struct Session<S: ContentStore + 'static = Store> {
    site: Arc<Site<S>>,
    parent: CancellationToken,
    mount: CancellationToken,
    view: Arc<watch::Sender<View>>,
}

impl<S: ContentStore + 'static> Session<S> {
    pub fn new(site: Arc<Site<S>>) -> Self {
        Self::with_parent(site, CancellationToken::new())
    }

    /// A session whose loads also stop when `parent` is cancelled
    pub fn with_parent(site: Arc<Site<S>>, parent: CancellationToken) -> Self {
        let mount = parent.child_token();
        let (view, _) = watch::channel(View::blank());
        Self {
            site,
            parent,
            mount,
            view: Arc::new(view),
        }
    }

    /// Mount the page for `path`
    ///
    /// Navigating to the already mounted key is a no-op.
    pub fn navigate(&mut self, path: &str) -> Transition {
        let route = Route::resolve(path);
        let key = match &route {
            Some(route) => route.path(),
            None => path.split(['?', '#']).next().unwrap_or_default().to_string(),
        };

        let (previous, generation) = {
            let view = self.view.borrow();
            let previous = (view.generation > 0).then(|| view.key.clone());
            (previous, view.generation + 1)
        };

        let transition = Transition::between(previous.as_deref(), &key);
        if transition == Transition::Stay {
            return transition;
        }

        self.mount.cancel();
        let token = self.parent.child_token();
        self.mount = token.clone();

        let page = Page::loading(route.as_ref());
        let settled = page.is_settled();
        tracing::debug!("Mounting {} (generation {})", key, generation);
        self.view.send_replace(View {
            key: key.clone(),
            route: route.clone(),
            page,
            query: String::new(),
            generation,
        });

        if !settled {
            self.spawn_load(route, key, generation, token);
        }

        transition
    }

    fn spawn_load(
        &self,
        route: Option<Route>,
        key: String,
        generation: u64,
        token: CancellationToken,
    ) {
        let site = Arc::clone(&self.site);
        let view = Arc::clone(&self.view);

        tokio::spawn(async move {
            let page = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Load of {} cancelled", key);
                    return;
                }
                page = Page::load(route.as_ref(), &site.store, &site.ctx.markdown) => page,
            };

            view.send_if_modified(|current| {
                if token.is_cancelled() || current.generation != generation {
                    tracing::debug!("Discarding stale load of {}", key);
                    return false;
                }
                current.page = page;
                true
            });
        });
    }

    /// Set the blog search term; filtering itself happens at render time
    pub fn search(&self, term: &str) {
        self.view.send_if_modified(|view| {
            if view.query == term {
                return false;
            }
            view.query = term.to_string();
            true
        });
    }

    /// Current view
    pub fn snapshot(&self) -> View {
        self.view.borrow().clone()
    }

    /// Wait until the mounted page has settled or its load was cancelled
    pub async fn settled(&self) -> View {
        let mut rx = self.view.subscribe();
        let mount = self.mount.clone();
        tokio::select! {
            result = rx.wait_for(|view| view.page.is_settled()) => match result {
                Ok(view) => View::clone(&view),
                Err(_) => self.snapshot(),
            },
            _ = mount.cancelled() => self.snapshot(),
        }
    }

    /// Cancel the mounted page's loads
    pub fn unmount(&mut self) {
        self.mount.cancel();
    }

    /// Full HTML document of the current view
    pub fn render(&self) -> String {
        let view = self.snapshot();
        render_document(
            &self.site.ctx,
            &view.key,
            view.route.as_ref(),
            &view.page,
            &view.query,
        )
    }
}

impl<S: ContentStore + 'static> Drop for Session<S> {
    fn drop(&mut self) {
        self.mount.cancel();
    }
}

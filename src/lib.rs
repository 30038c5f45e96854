//! qingping: server-rendered front end of the 青萍之末 blog and portfolio
//!
//! Pages are rendered from a content store holding an author directory, a
//! post index and one Markdown file per post. The store is either a local
//! directory or a remote base URL.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod server;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{FsStore, HttpStore, MarkdownRenderer, Store};

/// Everything a page needs to render, fixed at startup
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Translations for UI strings
    pub i18n: i18n::I18n,
    /// Markdown renderer configured from `highlight`
    pub markdown: MarkdownRenderer,
}

impl RenderContext {
    pub fn new(config: config::SiteConfig, i18n: i18n::I18n) -> Self {
        let markdown =
            MarkdownRenderer::with_options(&config.highlight.theme, config.highlight.line_number);
        Self {
            config,
            i18n,
            markdown,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        let config = config::SiteConfig::default();
        let i18n = i18n::I18n::new(&config.language);
        Self::new(config, i18n)
    }
}

/// The application: a content store plus its render context
pub struct Site<S = Store> {
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (export) directory
    pub public_dir: PathBuf,
    /// Where authors, posts and Markdown bodies come from
    pub store: S,
    pub ctx: RenderContext,
}

impl Site {
    /// Create a site from a directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let store = match &config.content.url {
            Some(url) => {
                tracing::debug!("Using remote content at {}", url);
                Store::Http(HttpStore::new(url))
            }
            None => {
                let dir = base_dir.join(&config.content.dir);
                tracing::debug!("Using local content at {:?}", dir);
                Store::Fs(FsStore::new(dir))
            }
        };

        let mut i18n = i18n::I18n::new(&config.language);
        i18n.load_languages(base_dir.join(&config.i18n_dir))?;

        Ok(Self::with_store(config, base_dir, store, i18n))
    }
}

impl<S> Site<S> {
    /// Assemble a site around an existing store
    pub fn with_store(
        config: config::SiteConfig,
        base_dir: PathBuf,
        store: S,
        i18n: i18n::I18n,
    ) -> Self {
        let public_dir = base_dir.join(&config.public_dir);
        Self {
            base_dir,
            public_dir,
            store,
            ctx: RenderContext::new(config, i18n),
        }
    }

    pub fn config(&self) -> &config::SiteConfig {
        &self.ctx.config
    }
}

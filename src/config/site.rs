//! Site configuration (site.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::theme::Theme;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // URL
    pub root: String,

    // Directory
    pub public_dir: String,
    pub i18n_dir: String,

    // Content store
    pub content: ContentConfig,

    // Static pages
    pub home: PageText,
    pub about: PageText,

    /// Per-section backgrounds, keyed by the first path segment ("home" for `/`)
    pub backgrounds: IndexMap<String, Background>,

    pub theme: Theme,
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "青萍之末".to_string(),
            language: "zh-CN".to_string(),

            root: "/".to_string(),

            public_dir: "public".to_string(),
            i18n_dir: "languages".to_string(),

            content: ContentConfig::default(),

            home: PageText {
                heading: "青萍之末".to_string(),
                body: "溪边青萍，静水流深。这是一片寻找内心平静的空间。".to_string(),
            },
            about: PageText {
                heading: "关于我们".to_string(),
                body: "青萍之末，取意于《庄子·秋水》：\"青萍之末，风之余也。\"表达了对生活细微之处的感悟与思考。"
                    .to_string(),
            },

            backgrounds: IndexMap::new(),

            theme: Theme::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Background for a route section, falling back to the home background
    pub fn background_for(&self, section: &str) -> Option<&Background> {
        self.backgrounds
            .get(section)
            .or_else(|| self.backgrounds.get("home"))
    }
}

/// Where the content store lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Local content root, relative to the site directory
    pub dir: String,
    /// Remote content root; takes precedence over `dir` when set
    pub url: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".to_string(),
            url: None,
        }
    }
}

/// Heading and body of a static page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageText {
    pub heading: String,
    pub body: String,
}

/// Section background
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub image: String,
    /// Opacity of the white wash laid over the image
    pub opacity: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            image: String::new(),
            opacity: 0.8,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

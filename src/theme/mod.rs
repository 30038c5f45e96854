//! Theme: palette, typography and page-transition motion
//!
//! The theme is plain configuration. It is read once from `site.yml`,
//! never mutated afterwards, and handed to the rendering layer through
//! [`crate::RenderContext`].

use serde::{Deserialize, Serialize};

/// Visual theme injected into every rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: String,
    pub motion: Motion,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font_family: "'Noto Serif SC', serif".to_string(),
            motion: Motion::default(),
        }
    }
}

/// Colour palette
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub text: String,
    pub text_secondary: String,
    pub paper: String,
    pub error: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#2c5530".to_string(),
            primary_light: "#588157".to_string(),
            primary_dark: "#1b4332".to_string(),
            secondary: "#88a878".to_string(),
            text: "#333333".to_string(),
            text_secondary: "#666666".to_string(),
            paper: "rgba(255, 255, 255, 0.9)".to_string(),
            error: "#d32f2f".to_string(),
        }
    }
}

/// Page enter/exit motion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// Enter animation length in milliseconds
    pub enter_ms: u64,
    /// Exit animation length in milliseconds; the next page waits for it
    pub exit_ms: u64,
    /// Vertical slide distance in pixels
    pub offset_px: u32,
    /// Scale at the start of enter and end of exit
    pub scale: f32,
    /// Delay between consecutive list items
    pub stagger_ms: u64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            enter_ms: 500,
            exit_ms: 300,
            offset_px: 20,
            scale: 0.98,
            stagger_ms: 100,
        }
    }
}

impl Theme {
    /// Render the site stylesheet
    pub fn stylesheet(&self) -> String {
        let p = &self.palette;
        let m = &self.motion;
        format!(
            r#":root {{
  --primary: {primary};
  --primary-light: {primary_light};
  --primary-dark: {primary_dark};
  --secondary: {secondary};
  --text: {text};
  --text-secondary: {text_secondary};
  --paper: {paper};
  --error: {error};
  --enter-ms: {enter}ms;
  --exit-ms: {exit}ms;
  --stagger-ms: {stagger}ms;
}}
* {{ box-sizing: border-box; }}
[hidden] {{ display: none !important; }}
body {{ margin: 0; min-height: 100vh; font-family: {font}; color: var(--text);
  background-size: cover; background-position: center; background-attachment: fixed; }}
.app {{ display: flex; flex-direction: column; height: 100vh; }}
.navbar {{ position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 8px;
  padding: 8px 24px; background: var(--primary); backdrop-filter: blur(10px); }}
.navbar .brand {{ flex: 1; color: #fff; font-size: 1.25rem; text-decoration: none; }}
.navbar .nav-link {{ color: rgba(255, 255, 255, 0.8); text-decoration: none; padding: 6px 12px; border-radius: 4px; }}
.navbar .nav-link.active, .navbar .nav-link:hover {{ color: #fff; background: rgba(255, 255, 255, 0.1); }}
.page-container {{ flex: 1; display: flex; flex-direction: column; width: 100%; margin: 0 auto; padding: 16px; min-height: 0; }}
.max-sm {{ max-width: 600px; }}
.max-md {{ max-width: 900px; }}
.max-lg {{ max-width: 1200px; }}
.page {{ flex: 1; position: relative; display: flex; flex-direction: column;
  animation: page-enter var(--enter-ms) cubic-bezier(0.4, 0, 0.2, 1) both; }}
.page.exiting {{ animation: page-exit var(--exit-ms) ease-in both; }}
.card {{ flex: 1; position: relative; background: var(--paper); border-radius: 8px; overflow: hidden;
  box-shadow: 0 3px 6px rgba(0, 0, 0, 0.16); backdrop-filter: blur(10px); }}
.scroll {{ position: absolute; inset: 0; overflow-y: auto; overflow-x: hidden; padding: 24px; }}
@keyframes page-enter {{
  from {{ opacity: 0; transform: translateY({offset}px) scale({scale}); }}
  to {{ opacity: 1; transform: none; }}
}}
@keyframes page-exit {{
  from {{ opacity: 1; transform: none; }}
  to {{ opacity: 0; transform: translateY(-{offset}px) scale({scale}); }}
}}
.page-heading, .post-heading, .author-name {{ color: var(--primary); font-weight: 500; }}
.status {{ text-align: center; padding: 32px; }}
.status.error {{ color: var(--error); }}
.search input {{ width: 100%; padding: 12px 16px; font-size: 1rem; border: 1px solid rgba(44, 85, 48, 0.3); border-radius: 4px; }}
.post-list {{ list-style: none; padding: 0; }}
.post-item {{ margin-bottom: 16px; padding: 16px; border-radius: 8px; background: rgba(255, 255, 255, 0.6);
  transition: transform 0.3s ease; }}
.post-item:hover {{ transform: translateX(8px); }}
.post-title {{ color: var(--primary); font-size: 1.25rem; text-decoration: none; }}
.post-meta {{ display: flex; gap: 16px; align-items: center; margin: 8px 0; color: var(--text-secondary); }}
.author-chip {{ display: inline-flex; gap: 8px; align-items: center; color: var(--primary); text-decoration: none; }}
.tags {{ display: flex; gap: 8px; flex-wrap: wrap; }}
.tag {{ padding: 2px 10px; border-radius: 12px; font-size: 0.8rem; background: rgba(44, 85, 48, 0.1); color: var(--primary); }}
.avatar {{ border-radius: 50%; object-fit: cover; display: inline-flex; align-items: center; justify-content: center;
  background: var(--secondary); color: #fff; }}
.avatar-sm {{ width: 24px; height: 24px; }}
.avatar-md {{ width: 64px; height: 64px; }}
.avatar-lg {{ width: 150px; height: 150px; font-size: 3rem; }}
.author-grid {{ display: grid; gap: 16px; grid-template-columns: repeat(auto-fill, minmax(360px, 1fr)); }}
.author-card {{ display: flex; gap: 16px; align-items: center; padding: 16px; border-radius: 8px; background: rgba(255, 255, 255, 0.6); }}
.author-card .author-link {{ display: flex; gap: 16px; align-items: center; flex: 1; color: inherit; text-decoration: none; }}
.author-bio {{ color: var(--text-secondary); overflow: hidden; display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; }}
.profile {{ text-align: center; margin-bottom: 48px; }}
.social-link {{ color: var(--primary); margin: 0 8px; }}
.social-link:hover {{ color: var(--primary-light); }}
.back {{ color: var(--primary); text-decoration: none; }}
.publication {{ display: block; padding: 16px; margin-bottom: 16px; border-radius: 8px; background: rgba(255, 255, 255, 0.6);
  color: inherit; text-decoration: none; }}
.publication-venue, .publication-doi {{ display: block; margin-top: 8px; font-size: 0.875rem; color: var(--text-secondary); }}
.publication-doi {{ color: var(--primary); }}
.markdown-body p {{ font-size: 1.1rem; line-height: 1.8; }}
.markdown-body img {{ max-width: 100%; }}
.markdown-body a {{ color: var(--primary); }}
.markdown-body h1, .markdown-body h2, .markdown-body h3 {{ color: var(--primary); font-weight: 500; }}
.stagger > * {{ animation: page-enter var(--enter-ms) ease-out both; }}
"#,
            primary = p.primary,
            primary_light = p.primary_light,
            primary_dark = p.primary_dark,
            secondary = p.secondary,
            text = p.text,
            text_secondary = p.text_secondary,
            paper = p.paper,
            error = p.error,
            enter = m.enter_ms,
            exit = m.exit_ms,
            stagger = m.stagger_ms,
            font = self.font_family,
            offset = m.offset_px,
            scale = m.scale,
        )
    }
}

//! Helper functions for page rendering
//!
//! URL generation under the configured root and small HTML builders shared
//! by every page.

mod html;
mod url;

pub use html::*;
pub use url::*;

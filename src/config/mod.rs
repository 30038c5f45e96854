//! Configuration module

mod site;

pub use site::Background;
pub use site::ContentConfig;
pub use site::HighlightConfig;
pub use site::PageText;
pub use site::SiteConfig;

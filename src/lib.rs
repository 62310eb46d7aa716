// Re-export modules
pub mod config;
pub mod error;
pub mod package;
pub mod parsers;
pub mod pipeline;
pub mod transport;

// Re-export commonly used types for convenience
pub use config::{ScraperConfig, SelectorConfig};
pub use error::{ScrapeError, TransportError};
pub use package::{Package, PackageRecord};
pub use pipeline::Scraper;
pub use transport::{HttpTransport, Response, Transport};

/// Page scraped when no URL is given
pub const DEFAULT_URL: &str = "https://videx.comesconnected.com";

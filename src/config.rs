use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a single-page package scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL of the page listing the packages
    pub url: String,

    /// HTTP method used for the request
    #[serde(default = "default_method")]
    pub method: String,

    /// CSS selectors locating each package and its fields
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// CSS selectors used during extraction.
///
/// Field selectors are evaluated relative to each matched package block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// One match per package offer
    #[serde(default = "default_package_selector")]
    pub package: String,

    #[serde(default = "default_title_selector")]
    pub title: String,

    /// Read as inner markup so line breaks survive
    #[serde(default = "default_description_selector")]
    pub description: String,

    #[serde(default = "default_price_selector")]
    pub price: String,

    #[serde(default = "default_discount_selector")]
    pub discount: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            package: default_package_selector(),
            title: default_title_selector(),
            description: default_description_selector(),
            price: default_price_selector(),
            discount: default_discount_selector(),
        }
    }
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: default_method(),
            selectors: SelectorConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for method
fn default_method() -> String {
    crate::transport::DEFAULT_METHOD.to_string()
}

fn default_package_selector() -> String {
    "div.package".to_string()
}

fn default_title_selector() -> String {
    "div.header > h3".to_string()
}

fn default_description_selector() -> String {
    "div.package-name".to_string()
}

fn default_price_selector() -> String {
    "div.package-price > span.price-big".to_string()
}

fn default_discount_selector() -> String {
    "div.package-price > p".to_string()
}

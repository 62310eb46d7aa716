use crate::config::{ScraperConfig, SelectorConfig};
use crate::error::{ScrapeError, TransportError};
use crate::package::Package;
use crate::parsers::{select_inner_html, select_text};
use crate::transport::{DEFAULT_METHOD, HttpTransport, Response, Transport};
use scraper::{ElementRef, Html, Selector};
use std::cmp::Ordering;

/// Status code counted as a successful fetch. Other 2xx codes are not.
pub const SUCCESS_STATUS: i32 = 200;

/// Compiled form of a [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct PackageSelectors {
    package: Selector,
    title: Selector,
    description: Selector,
    price: Selector,
    discount: Selector,
}

impl Default for PackageSelectors {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("Default selectors should be valid")
    }
}

impl PackageSelectors {
    /// Compile every selector, failing on the first invalid one
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            package: parse_selector(&config.package)?,
            title: parse_selector(&config.title)?,
            description: parse_selector(&config.description)?,
            price: parse_selector(&config.price)?,
            discount: parse_selector(&config.discount)?,
        })
    }

    /// Builds one package from a matched package block.
    ///
    /// Each field is looked up on its own; a missing element leaves that
    /// field at its default. A price or discount of zero is treated the same
    /// as no amount at all.
    pub fn extract(&self, fragment: ElementRef<'_>) -> Package {
        let mut package = Package::new();

        package.set_title(select_text(fragment, &self.title));
        package.set_description(&select_inner_html(fragment, &self.description));

        let price_text = select_text(fragment, &self.price);
        match package.price_from_text(&price_text) {
            Some(price) if price != 0.0 => package.set_price(price),
            _ => ::log::debug!("No price found for '{}'", package.title()),
        }

        let discount_text = select_text(fragment, &self.discount);
        match package.price_from_text(&discount_text) {
            Some(discount) if discount != 0.0 => package.set_discount(discount),
            _ => ::log::debug!("No discount found for '{}'", package.title()),
        }

        package
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Fetches a single page and extracts the package offers listed on it.
///
/// Usage is fetch, check [`Scraper::succeeded`], then extract:
///
/// ```no_run
/// use package_scrape::Scraper;
///
/// let mut scraper = Scraper::new("https://videx.comesconnected.com");
/// let _ = scraper.fetch();
/// if let Some(packages) = scraper.extract_packages() {
///     println!("found {} packages", packages.len());
/// }
/// ```
pub struct Scraper {
    transport: Box<dyn Transport>,
    url: String,
    method: String,
    selectors: PackageSelectors,
    response: Option<Response>,
    document: Option<Html>,
    packages: Vec<Package>,
}

impl Scraper {
    /// Create a scraper issuing GET requests over HTTP
    pub fn new(url: &str) -> Self {
        Self::with_transport(url, HttpTransport::new())
    }

    /// Create a scraper with a caller-supplied transport
    pub fn with_transport(url: &str, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            url: url.to_string(),
            method: DEFAULT_METHOD.to_string(),
            selectors: PackageSelectors::default(),
            response: None,
            document: None,
            packages: Vec::new(),
        }
    }

    /// Create a scraper from configuration; fails if a selector is invalid
    pub fn from_config(
        config: &ScraperConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self, ScrapeError> {
        let mut scraper = Self::with_transport(&config.url, transport);
        scraper.method = config.method.clone();
        scraper.selectors = PackageSelectors::compile(&config.selectors)?;
        Ok(scraper)
    }

    /// Set the HTTP method
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn set_transport(&mut self, transport: impl Transport + 'static) {
        self.transport = Box::new(transport);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: &str) {
        self.method = method.to_string();
    }

    /// Response from the last fetch, if it reached the server
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Parsed body of the last fetch
    pub fn document(&self) -> Option<&Html> {
        self.document.as_ref()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn set_packages(&mut self, packages: Vec<Package>) {
        self.packages = packages;
    }

    /// Replace the packages from a JSON array.
    ///
    /// Every element must describe a package, otherwise nothing is replaced
    /// and an [`ScrapeError::InvalidArgument`] is returned.
    pub fn set_packages_from_json(&mut self, json: &str) -> Result<(), ScrapeError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json).map_err(|e| {
            ScrapeError::InvalidArgument(format!("expected a JSON array of packages: {}", e))
        })?;

        let mut packages = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let package = serde_json::from_value::<Package>(value).map_err(|e| {
                ScrapeError::InvalidArgument(format!(
                    "only packages may be set, element {} is not one: {}",
                    index, e
                ))
            })?;
            packages.push(package);
        }

        self.set_packages(packages);
        Ok(())
    }

    pub fn add_package(&mut self, package: Package) {
        self.packages.push(package);
    }

    pub fn clear_packages(&mut self) {
        self.packages.clear();
    }

    /// Perform the request and keep the response and parsed document.
    ///
    /// A transport failure clears any earlier response and document, so
    /// [`Scraper::succeeded`] reports false afterwards. Stored packages are
    /// left as they are.
    pub fn fetch(&mut self) -> Result<&Response, TransportError> {
        ::log::info!("Fetching {} {}", self.method, self.url);

        match self.transport.request(&self.method, &self.url) {
            Ok(response) => {
                ::log::info!("{} responded with status {}", self.url, response.status);
                self.document = Some(Html::parse_document(&response.body));
                Ok(&*self.response.insert(response))
            }
            Err(e) => {
                ::log::warn!("Fetching {} failed: {}", self.url, e);
                self.response = None;
                self.document = None;
                Err(e)
            }
        }
    }

    /// True only when the last fetch returned status 200
    pub fn succeeded(&self) -> bool {
        self.response
            .as_ref()
            .is_some_and(|response| response.status == SUCCESS_STATUS)
    }

    /// Turns an unsuccessful fetch into an error naming the URL and status
    pub fn ensure_succeeded(&self) -> Result<(), ScrapeError> {
        if self.succeeded() {
            return Ok(());
        }

        Err(ScrapeError::HttpStatus {
            url: self.url.clone(),
            status: self.response.as_ref().map(|response| response.status),
        })
    }

    /// Extract one package per matched package block.
    ///
    /// Returns `None` without looking at the page unless the last fetch
    /// succeeded. Otherwise the stored packages are replaced by the new list.
    pub fn extract_packages(&mut self) -> Option<&[Package]> {
        if !self.succeeded() {
            ::log::debug!("Skipping extraction, no successful fetch of {}", self.url);
            return None;
        }

        let document = self.document.as_ref()?;
        let mut packages = Vec::new();
        for fragment in document.select(&self.selectors.package) {
            packages.push(self.selectors.extract(fragment));
        }

        ::log::info!("Extracted {} packages from {}", packages.len(), self.url);

        self.packages = packages;
        Some(&self.packages)
    }

    /// Copy of the packages ranked by annual price, most expensive first.
    ///
    /// Packages with equal annual prices keep their relative order. Packages
    /// whose annual price is NaN go last.
    pub fn packages_by_annual_price_descending(&self) -> Vec<Package> {
        let mut ranked = self.packages.clone();
        ranked.sort_by(|a, b| compare_annual_price_descending(a.annual_price(), b.annual_price()));
        ranked
    }
}

/// Descending order over annual prices, with NaN after every number
fn compare_annual_price_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

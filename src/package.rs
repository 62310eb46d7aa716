use crate::parsers::{extract_price, format_money, replace_line_breaks};
use serde::{Deserialize, Serialize};

/// Description keyword that marks a price as covering a whole year
const ANNUAL_MARKER: &str = "per year";

/// Months covered by an annual price
const MONTHS_PER_YEAR: i32 = 12;

/// One subscription offer scraped from a package block on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Package {
    title: String,

    /// Raw markup with line breaks replaced by spaces
    description: String,

    #[serde(default)]
    price: f64,

    /// Secondary amount from its own element, never subtracted from `price`
    #[serde(default)]
    discount: f64,

    /// Number of months a single `price` covers
    #[serde(
        default = "default_billing_period_months",
        deserialize_with = "deserialize_billing_period_months"
    )]
    billing_period_months: i32,
}

/// Presentation snapshot of a package, with formatted amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount: String,
}

fn default_billing_period_months() -> i32 {
    1
}

fn coerce_billing_period_months(months: i32) -> i32 {
    if months < 0 { 1 } else { months }
}

fn deserialize_billing_period_months<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    i32::deserialize(deserializer).map(coerce_billing_period_months)
}

impl Default for Package {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            discount: 0.0,
            billing_period_months: default_billing_period_months(),
        }
    }
}

impl Package {
    /// Create an empty package billed monthly
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Stores the description with line breaks replaced by spaces.
    ///
    /// If the lower-cased text contains "per year" the billing period becomes
    /// twelve months. Any other text leaves the current period untouched, so a
    /// later non-annual description never reverts an earlier annual one.
    pub fn set_description(&mut self, description: &str) {
        self.description = replace_line_breaks(description);

        if self.description.to_lowercase().contains(ANNUAL_MARKER) {
            self.billing_period_months = MONTHS_PER_YEAR;
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn set_discount(&mut self, discount: f64) {
        self.discount = discount;
    }

    pub fn billing_period_months(&self) -> i32 {
        self.billing_period_months
    }

    /// Negative values are replaced by 1. Zero is stored as given.
    pub fn set_billing_period_months(&mut self, months: i32) {
        self.billing_period_months = coerce_billing_period_months(months);
    }

    /// Parses a scraped price string, see [`crate::parsers::price::PRICE_PATTERN`]
    pub fn price_from_text(&self, text: &str) -> Option<f64> {
        extract_price(text)
    }

    pub fn format_price(&self) -> String {
        format_money(self.price)
    }

    pub fn format_discount(&self) -> String {
        format_money(self.discount)
    }

    /// Price normalised to twelve months.
    ///
    /// A zero-month period yields `f64::INFINITY`, which ranks first.
    pub fn annual_price(&self) -> f64 {
        if self.billing_period_months == 0 {
            return f64::INFINITY;
        }
        self.price * f64::from(MONTHS_PER_YEAR) / f64::from(self.billing_period_months)
    }

    pub fn to_record(&self) -> PackageRecord {
        PackageRecord {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.format_price(),
            discount: self.format_discount(),
        }
    }
}

impl From<&Package> for PackageRecord {
    fn from(package: &Package) -> Self {
        package.to_record()
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "package-scrape")]
#[command(about = "Scrapes subscription packages from a single web page")]
#[command(version)]
pub struct Args {
    /// Page listing the packages (overrides the URL in --config)
    pub url: Option<String>,

    /// HTTP method (overrides the method in --config)
    #[arg(short, long)]
    pub method: Option<String>,

    /// JSON configuration file with the URL, method and selectors
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rank packages by annual price, most expensive first
    #[arg(short, long, default_value_t = false)]
    pub sort: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

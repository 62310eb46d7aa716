use clap::Parser;
use package_scrape::{
    DEFAULT_URL, HttpTransport, Package, PackageRecord, ScrapeError, Scraper, ScraperConfig,
};

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ScrapeError> {
    let config = build_config(args)?;
    ::log::info!("Starting scrape of {}", config.url);

    let mut scraper = Scraper::from_config(&config, HttpTransport::new())?;

    fetch_checked(&mut scraper)?;

    scraper.extract_packages();
    let packages: Vec<Package> = if args.sort {
        scraper.packages_by_annual_price_descending()
    } else {
        scraper.packages().to_vec()
    };

    let records: Vec<PackageRecord> = packages.iter().map(PackageRecord::from).collect();
    let output = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{}", output);

    ::log::info!("Scrape complete - {} packages", records.len());
    Ok(())
}

/// Fetch the page, failing unless it came back with status 200
fn fetch_checked(scraper: &mut Scraper) -> Result<(), ScrapeError> {
    if let Err(source) = scraper.fetch().map(|_| ()) {
        return Err(ScrapeError::Fetch {
            url: scraper.url().to_string(),
            source,
        });
    }
    scraper.ensure_succeeded()
}

/// Merge the optional config file with command-line overrides
fn build_config(args: &Args) -> Result<ScraperConfig, ScrapeError> {
    let mut config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::new(DEFAULT_URL),
    };

    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    if let Some(method) = &args.method {
        config.method = method.clone();
    }

    Ok(config)
}

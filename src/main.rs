use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::ConfigError;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use validator::{Validate, ValidationErrors};

use event_spot::config::{LoggingSettings, Settings};
use event_spot::core::{EventFinder, SortError, SortKey};
use event_spot::models::{DiscoveryQuery, ErrorResponse, LocationData};
use event_spot::services::{load_or_sample, CatalogError, FixedLocation, LocationProvider, NoGeolocation};
use event_spot::views::{DiscoveryPage, EventFilters, FavoriteSet, LocationDetector, Selection};

#[derive(Parser)]
#[command(author, version, about = "Discover events near you")]
struct Args {
    /// Latitude of your position (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude of your position (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Search radius in kilometers
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<f64>,
    /// Only show this category ("all" for every category)
    #[arg(long)]
    category: Option<String>,
    /// Only show this city ("all" for every city)
    #[arg(long)]
    city: Option<String>,
    /// Ordering: date or distance
    #[arg(long)]
    sort: Option<SortKey>,
    /// Mark an event id as favorite (repeatable)
    #[arg(long = "favorite")]
    favorites: Vec<String>,
    /// Event catalog (.json or .toml) instead of the built-in sample
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print JSON instead of cards
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Load settings from this file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip location detection and show every event
    #[arg(long, default_value_t = false)]
    no_location: bool,
    /// List available categories and cities, then exit
    #[arg(long, default_value_t = false)]
    list_options: bool,
}

/// Everything that ends the run early, tagged with its error kind
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("settings out of range: {0}")]
    Settings(ValidationErrors),
    #[error(transparent)]
    Query(ValidationErrors),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Event(#[from] SortError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    fn kind(&self) -> &'static str {
        match self {
            CliError::Config(_) | CliError::Settings(_) => "invalid_config",
            CliError::Query(_) => "invalid_query",
            CliError::Catalog(_) => "invalid_catalog",
            CliError::Event(_) => "invalid_event",
            CliError::Serialization(_) => "serialization",
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Run detection once and report the status line plus the location, if any
async fn detect<P: LocationProvider>(
    provider: P,
    settings: &Settings,
) -> (String, Option<LocationData>) {
    let mut detector = LocationDetector::new(provider)
        .with_timeout(settings.location.timeout())
        .with_max_attempts(settings.location.max_attempts)
        .with_max_age(settings.location.max_age());

    let location = match detector.detect().await {
        Ok(location) => Some(location),
        Err(e) => {
            warn!("Continuing without location: {}", e);
            None
        }
    };

    (detector.status_line(), location)
}

/// Validate the configured defaults and the command line, then merge them
///
/// Configured values fail as `invalid_config`, command-line values as
/// `invalid_query`.
fn build_query(args: &Args, settings: &Settings) -> Result<DiscoveryQuery, CliError> {
    let defaults = DiscoveryQuery::from(settings);
    defaults.validate().map_err(CliError::Settings)?;

    let query = DiscoveryQuery {
        latitude: args.lat,
        longitude: args.lon,
        radius_km: args.radius,
        category: args.category.clone(),
        city: args.city.clone(),
        sort_by: args.sort.unwrap_or(settings.discovery.sort_by),
    };
    query.validate().map_err(CliError::Query)?;

    Ok(query.or(defaults))
}

fn render_output(
    page: &DiscoveryPage,
    status: &str,
    location: Option<&LocationData>,
    json: bool,
) -> Result<String, CliError> {
    if json {
        let response = page.response(location)?;
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(page.render(status, location)?)
    }
}

fn fail(json: bool, err: CliError) -> ExitCode {
    error!("{}: {}", err.kind(), err);
    if json {
        let body = ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
        };
        if let Ok(text) = serde_json::to_string_pretty(&body) {
            println!("{}", text);
        }
    }
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = match loaded {
        Ok(settings) => {
            init_logging(&settings.logging);
            settings
        }
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return fail(args.json, e.into());
        }
    };

    info!("Starting EventSpot...");

    let query = match build_query(&args, &settings) {
        Ok(query) => query,
        Err(e) => return fail(args.json, e),
    };

    let catalog_path = args.catalog.as_deref().or(settings.catalog.path.as_deref());
    let events = match load_or_sample(catalog_path) {
        Ok(events) => events,
        Err(e) => return fail(args.json, e.into()),
    };

    let finder = EventFinder::new(query.radius_km.unwrap_or(settings.discovery.radius_km));
    let mut page = DiscoveryPage::new(events, finder);

    if args.list_options {
        println!("Categories: {}", page.available_categories().join(", "));
        println!("Cities: {}", page.available_cities().join(", "));
        return ExitCode::SUCCESS;
    }

    page.filters = EventFilters {
        category: Selection::from(query.category.clone()),
        city: Selection::from(query.city.clone()),
    };
    page.sort_by = query.sort_by;
    page.favorites = args.favorites.iter().map(String::as_str).collect::<FavoriteSet>();

    let (status, location) = if args.no_location {
        ("Location detection skipped".to_string(), None)
    } else if let Some(origin) = query.origin() {
        detect(FixedLocation::new(origin), &settings).await
    } else {
        detect(NoGeolocation, &settings).await
    };

    match render_output(&page, &status, location.as_ref(), args.json) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => fail(args.json, e),
    }
}

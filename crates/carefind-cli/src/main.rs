use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use carefind_core::Capability;
use carefind_geo::{PostalResolver, ResolveError};
use carefind_search::{classify, preferred_service_text};

#[derive(Debug, Parser)]
#[command(name = "carefind-cli")]
#[command(about = "Community health center search from the terminal")]
struct Cli {
    /// Path to the health center CSV. Overrides CAREFIND_DATA_PATH.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find centers near a postal code, ranked by distance.
    Search {
        #[arg(long)]
        postal_code: String,

        /// Search radius in miles.
        #[arg(long, default_value_t = 10.0)]
        radius: f64,

        /// Capability filters (repeatable): primary-care, dental-care,
        /// vision, behavioral-health, pharmacy. Matching is an OR across
        /// the selected filters.
        #[arg(long = "capability")]
        capabilities: Vec<String>,
    },
    /// List every record in the data file, including ones without
    /// coordinates.
    Centers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = carefind_core::load_app_config()?;
    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());

    let records = carefind_data::load_records(&data_path)
        .with_context(|| format!("loading records from {}", data_path.display()))?;

    match cli.command {
        Commands::Search {
            postal_code,
            radius,
            capabilities,
        } => {
            let capabilities = capabilities
                .iter()
                .map(|name| name.parse::<Capability>())
                .collect::<Result<Vec<_>, _>>()?;

            let resolver = PostalResolver::new(
                &config.geocoder_base_url,
                &config.geocoder_user_agent,
                config.geocoder_timeout_secs,
            )?;

            let location = match resolver.resolve(&postal_code).await {
                Ok(location) => location,
                Err(e @ ResolveError::InvalidFormat { .. }) => {
                    anyhow::bail!("{e}");
                }
                Err(ResolveError::NotFound { postal_code }) => {
                    // Resolution failure is not the same as zero results.
                    anyhow::bail!("could not locate postal code {postal_code}");
                }
            };

            let place = location
                .city
                .as_deref()
                .map_or_else(String::new, |city| format!(" ({city})"));
            println!(
                "Searching within {radius} miles of {}{place}",
                location.postal_code
            );

            let results = carefind_search::search(&records, location.point, radius, &capabilities)?;
            if results.is_empty() {
                println!("No centers found within {radius} miles.");
                return Ok(());
            }

            for result in &results {
                let record = result.record;
                let services = preferred_service_text(
                    record.curated_service_types.as_deref(),
                    record.enriched_service_types.as_deref(),
                    record.service_types.as_deref(),
                )
                .unwrap_or("services not listed");
                println!(
                    "{:6.1} mi  {} — {}, {} {}  [{}]  {}",
                    result.distance_miles,
                    record.name,
                    record.city,
                    record.state,
                    record.zipcode,
                    record.phone,
                    services
                );
            }
        }
        Commands::Centers => {
            for record in &records {
                let services = preferred_service_text(
                    record.curated_service_types.as_deref(),
                    record.enriched_service_types.as_deref(),
                    record.service_types.as_deref(),
                );
                let flags = classify(services);
                let geocoded = if record.coordinates.is_some() {
                    "geocoded"
                } else {
                    "no coordinates"
                };
                println!(
                    "{} — {}, {} {} [{geocoded}] primary-care={} dental-care={} vision={} behavioral-health={} pharmacy={}",
                    record.name,
                    record.city,
                    record.state,
                    record.zipcode,
                    flags.primary_care,
                    flags.dental_care,
                    flags.vision,
                    flags.behavioral_health,
                    flags.pharmacy
                );
            }
        }
    }

    Ok(())
}

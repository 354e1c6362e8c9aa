//! Verdant command-line front end.
//!
//! Validates entity documents and computes planting dates from the same
//! boundary code a server would use.
//!
//! Usage:
//!   verdant validate --kind plant plant.json
//!   verdant planting-date --locations locations.json --request request.json --year 2026

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use verdant_model::{
    EntityListSchema, GARDEN_SCHEMA, LOCATION_SCHEMA, PLANT_SCHEMA, SEED_PACKET_SCHEMA,
};
use verdant_service::{
    features::{PLANTING_DATE, STRICT_REFERENCES},
    parse_inbound, planting_date_response, respond_with_error, validate_async, validate_inbound,
    FeatureLookup, IndicatorTargetsExist, ServiceConfig, ServiceError, ServiceResult,
    CALCULATE_DATE_REQUEST_SCHEMA,
};

#[derive(Parser, Debug)]
#[command(name = "verdant")]
#[command(about = "Validate garden documents and compute planting dates")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a JSON document and print it in canonical form
    Validate {
        /// What the document is expected to be
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// The document to validate
        file: PathBuf,
    },

    /// Find the first day a plant can go in the ground
    PlantingDate {
        /// JSON array of locations
        #[arg(long)]
        locations: PathBuf,

        /// JSON calculate-date request
        #[arg(long)]
        request: PathBuf,

        /// Calendar year; defaults to the current one
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Plant,
    SeedPacket,
    Garden,
    Location,
    CalculateDate,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    }
    .with_overrides(|name| std::env::var(name).ok())?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter '{}'", config.log_filter))?
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    for (name, state) in config.features.iter() {
        debug!("Feature {}: {}", name, state);
    }

    let outcome = match args.command {
        Command::Validate { kind, file } => {
            let body = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            info!("Validating {:?} as {:?}", file, kind);
            validate(kind, &body, &config).await
        }
        Command::PlantingDate {
            locations,
            request,
            year,
        } => {
            let locations = fs::read_to_string(&locations)
                .with_context(|| format!("failed to read {}", locations.display()))?;
            let request = fs::read_to_string(&request)
                .with_context(|| format!("failed to read {}", request.display()))?;
            let year = year.unwrap_or_else(|| chrono::Utc::now().year());
            planting_date(&locations, &request, year, &config)
        }
    };

    match outcome {
        Ok(value) => {
            print_json(&value)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_json(&respond_with_error(&error))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn validate(kind: Kind, body: &str, config: &ServiceConfig) -> ServiceResult<Value> {
    match kind {
        Kind::Plant => to_json(&parse_inbound(&PLANT_SCHEMA, body)?),
        Kind::SeedPacket => to_json(&parse_inbound(&SEED_PACKET_SCHEMA, body)?),
        Kind::Location => to_json(&parse_inbound(&LOCATION_SCHEMA, body)?),
        Kind::CalculateDate => to_json(&parse_inbound(&CALCULATE_DATE_REQUEST_SCHEMA, body)?),
        Kind::Garden => {
            let garden = if config.features.has_feature(STRICT_REFERENCES) {
                let value: Value = serde_json::from_str(body)?;
                validate_async(&GARDEN_SCHEMA, &value, &IndicatorTargetsExist).await?
            } else {
                parse_inbound(&GARDEN_SCHEMA, body)?
            };
            to_json(&garden)
        }
    }
}

fn planting_date(
    locations: &str,
    request: &str,
    year: i32,
    config: &ServiceConfig,
) -> ServiceResult<Value> {
    if !config.features.has_feature(PLANTING_DATE) {
        return Err(ServiceError::invalid_argument(
            "command",
            format!("feature '{PLANTING_DATE}' is disabled"),
        ));
    }
    let locations: Value = serde_json::from_str(locations)?;
    let locations = validate_inbound(&EntityListSchema::new(&LOCATION_SCHEMA), &locations)?;
    let request = parse_inbound(&CALCULATE_DATE_REQUEST_SCHEMA, request)?;
    to_json(&planting_date_response(&request, &locations, year)?)
}

fn to_json<T: Serialize>(value: &T) -> ServiceResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! When to plant: matching a temperature against a location's monthly ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use verdant_model::{Context, Location, ObjectFields, Schema, StringSchema, TemperatureSchema};
use verdant_types::{to_celsius, Temperature, TEMPERATURE_COMPARATOR};

use crate::error::{ServiceError, ServiceResult};

/// `{locationId, temperature}`: the minimum soil temperature a plant needs
/// and where it will be planted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateDateRequest {
    pub location_id: String,
    pub temperature: Temperature,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateDateRequestSchema;

pub static CALCULATE_DATE_REQUEST_SCHEMA: CalculateDateRequestSchema = CalculateDateRequestSchema;

impl Schema for CalculateDateRequestSchema {
    type Output = CalculateDateRequest;

    fn describe(&self) -> String {
        "calculate date request".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<CalculateDateRequest> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let location_id = fields.field("locationId", &StringSchema::non_empty(), ctx);
        let temperature = fields.field("temperature", &TemperatureSchema, ctx);
        let exact = fields.finish(ctx);

        let (Some(location_id), Some(temperature), true) = (location_id, temperature, exact) else {
            return None;
        };
        Some(CalculateDateRequest {
            location_id,
            temperature,
        })
    }
}

/// Zero-based months whose range at `location` contains `temperature`,
/// in calendar order.
#[must_use]
pub fn planting_months(location: &Location, temperature: &Temperature) -> Vec<u32> {
    let mut months: Vec<u32> = location
        .monthly_temperatures
        .iter()
        .filter(|monthly| {
            monthly
                .temperature_range
                .contains(temperature, &TEMPERATURE_COMPARATOR)
        })
        .map(|monthly| monthly.month)
        .collect();
    months.sort_unstable();
    months.dedup();
    months
}

/// The first day of the earliest month in `year` whose range at the requested
/// location contains the requested temperature. `None` when no month matches.
pub fn calculate_planting_date(
    request: &CalculateDateRequest,
    locations: &[Location],
    year: i32,
) -> ServiceResult<Option<NaiveDate>> {
    let location = find_location(locations, &request.location_id)?;
    let months = planting_months(location, &request.temperature);
    debug!(
        location = %location.id,
        celsius = to_celsius(request.temperature),
        matches = months.len(),
        "matched monthly ranges"
    );
    let Some(&month) = months.first() else {
        return Ok(None);
    };
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(Some)
        .ok_or_else(|| ServiceError::invalid_argument("year", format!("{year} is out of range")))
}

fn find_location<'a>(locations: &'a [Location], id: &str) -> ServiceResult<&'a Location> {
    locations
        .iter()
        .find(|location| location.id == id)
        .ok_or_else(|| ServiceError::NotFound {
            kind: "location",
            id: id.to_string(),
        })
}

/// What the CLI prints for a planting-date request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingDateResponse {
    pub location_id: String,
    pub months: Vec<String>,
    pub date: Option<NaiveDate>,
}

/// Runs [`calculate_planting_date`] and names the matching months.
pub fn planting_date_response(
    request: &CalculateDateRequest,
    locations: &[Location],
    year: i32,
) -> ServiceResult<PlantingDateResponse> {
    let date = calculate_planting_date(request, locations, year)?;
    let location = find_location(locations, &request.location_id)?;
    let months = planting_months(location, &request.temperature)
        .into_iter()
        .map(|month| verdant_model::MONTH_NAMES[month as usize % 12].to_string())
        .collect();
    Ok(PlantingDateResponse {
        location_id: request.location_id.clone(),
        months,
        date,
    })
}

//! Location reference data: per-month temperature ranges for a place.

use serde::Serialize;
use serde_json::Value;
use verdant_types::TemperatureRange;

use crate::entity::Identified;
use crate::issue::IssueCode;
use crate::primitive::{EntityListSchema, IntegerSchema, StringSchema};
use crate::schema::{Context, ObjectFields, Schema};
use crate::values::TemperatureRangeSchema;

/// Month names indexed by the zero-based `month` field.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub region: String,
    pub country: String,
    pub monthly_temperatures: Vec<MonthlyTemperature>,
}

/// Typical temperature range for one month; `month` is `0..=11`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTemperature {
    pub id: String,
    pub month: u32,
    pub temperature_range: TemperatureRange,
}

impl MonthlyTemperature {
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize % 12]
    }
}

impl Location {
    #[must_use]
    pub fn range_for_month(&self, month: u32) -> Option<&TemperatureRange> {
        self.monthly_temperatures
            .iter()
            .find(|monthly| monthly.month == month)
            .map(|monthly| &monthly.temperature_range)
    }
}

impl Identified for Location {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Identified for MonthlyTemperature {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationSchema;

const MONTHS: EntityListSchema<MonthlyTemperatureSchema> =
    EntityListSchema::new(MonthlyTemperatureSchema);

impl Schema for LocationSchema {
    type Output = Location;

    fn describe(&self) -> String {
        "location".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Location> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let name = fields.field("name", &StringSchema::non_empty(), ctx);
        let region = fields.field("region", &StringSchema::any(), ctx);
        let country = fields.field("country", &StringSchema::non_empty(), ctx);
        let monthly_temperatures = fields.field("monthlyTemperatures", &MONTHS, ctx);
        let distinct_months = ctx.at("monthlyTemperatures", |ctx| {
            check_distinct_months(value.get("monthlyTemperatures"), ctx)
        });
        let exact = fields.finish(ctx);

        let (
            Some(id),
            Some(name),
            Some(region),
            Some(country),
            Some(monthly_temperatures),
            true,
            true,
        ) = (
            id,
            name,
            region,
            country,
            monthly_temperatures,
            distinct_months,
            exact,
        )
        else {
            return None;
        };
        Some(Location {
            id,
            name,
            region,
            country,
            monthly_temperatures,
        })
    }
}

/// Each month may appear at most once. Entries whose `month` is malformed
/// are left to the element schema.
fn check_distinct_months(entries: Option<&Value>, ctx: &mut Context) -> bool {
    let Some(Value::Array(entries)) = entries else {
        return true;
    };
    let mut seen = [false; 12];
    let mut ok = true;
    for (index, entry) in entries.iter().enumerate() {
        let Some(month) = entry
            .get("month")
            .and_then(Value::as_f64)
            .filter(|month| month.fract() == 0.0 && (0.0..12.0).contains(month))
        else {
            continue;
        };
        let month = month as usize;
        if std::mem::replace(&mut seen[month], true) {
            ctx.at(index, |ctx| {
                ctx.at("month", |ctx| {
                    ctx.report(
                        IssueCode::Custom,
                        format!("Duplicate month '{}' in location", MONTH_NAMES[month]),
                    );
                });
            });
            ok = false;
        }
    }
    ok
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyTemperatureSchema;

impl Schema for MonthlyTemperatureSchema {
    type Output = MonthlyTemperature;

    fn describe(&self) -> String {
        "monthly temperature".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<MonthlyTemperature> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let id = fields.field("id", &StringSchema::non_empty(), ctx);
        let month = fields.field("month", &IntegerSchema::between(0, 11), ctx);
        let temperature_range = fields.field("temperatureRange", &TemperatureRangeSchema, ctx);
        let exact = fields.finish(ctx);

        let (Some(id), Some(month), Some(temperature_range), true) =
            (id, month, temperature_range, exact)
        else {
            return None;
        };
        Some(MonthlyTemperature {
            id,
            // 0..=11 was enforced above.
            month: month as u32,
            temperature_range,
        })
    }
}

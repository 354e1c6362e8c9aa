//! Schemas for the value objects defined in `verdant-types`.

use serde_json::Value;
use verdant_types::{
    Distance, DistanceUnit, RgbColor, ScalarComparator, Temperature, TemperatureRange,
    TemperatureUnit, XyCoordinate, TEMPERATURE_COMPARATOR,
};

use crate::entity::Presentation;
use crate::issue::IssueCode;
use crate::primitive::{
    EnumSchema, IntegerSchema, NumberSchema, Optional, StringSchema, WireEnum,
};
use crate::schema::{Context, ObjectFields, Schema};

impl WireEnum for DistanceUnit {
    const VARIANTS: &'static [Self] = &DistanceUnit::ALL;

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}

impl WireEnum for TemperatureUnit {
    const VARIANTS: &'static [Self] = &TemperatureUnit::ALL;

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}

/// `{value: number, unit: inches|feet|yards|meters|centimeters}`
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceSchema;

impl Schema for DistanceSchema {
    type Output = Distance;

    fn describe(&self) -> String {
        "distance".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Distance> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let amount = fields.field("value", &NumberSchema::any(), ctx);
        let unit = fields.field("unit", &EnumSchema::<DistanceUnit>::new(), ctx);
        let exact = fields.finish(ctx);
        let (Some(amount), Some(unit), true) = (amount, unit, exact) else {
            return None;
        };
        Some(Distance::new(amount, unit))
    }
}

/// `{value: number, unit: C|F}` or the pair form `[value, unit]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureSchema;

impl Schema for TemperatureSchema {
    type Output = Temperature;

    fn describe(&self) -> String {
        "temperature".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Temperature> {
        if let Value::Array(pair) = value {
            return check_temperature_pair(pair, ctx);
        }
        let mut fields = ObjectFields::open(value, ctx)?;
        let amount = fields.field("value", &NumberSchema::any(), ctx);
        let unit = fields.field("unit", &EnumSchema::<TemperatureUnit>::new(), ctx);
        let exact = fields.finish(ctx);
        let (Some(amount), Some(unit), true) = (amount, unit, exact) else {
            return None;
        };
        Some(Temperature::new(amount, unit))
    }
}

fn check_temperature_pair(pair: &[Value], ctx: &mut Context) -> Option<Temperature> {
    let [amount, unit] = pair else {
        ctx.report(
            IssueCode::Custom,
            format!("Expected [value, unit] pair, received {} element(s)", pair.len()),
        );
        return None;
    };
    let amount = ctx.at(0usize, |ctx| NumberSchema::any().check(amount, ctx));
    let unit = ctx.at(1usize, |ctx| EnumSchema::<TemperatureUnit>::new().check(unit, ctx));
    Some(Temperature::new(amount?, unit?))
}

/// `{min: temperature, max: temperature}` with `max` not below `min`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureRangeSchema;

impl Schema for TemperatureRangeSchema {
    type Output = TemperatureRange;

    fn describe(&self) -> String {
        "temperature range".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<TemperatureRange> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let min = fields.field("min", &TemperatureSchema, ctx);
        let max = fields.field("max", &TemperatureSchema, ctx);
        let exact = fields.finish(ctx);
        let (Some(min), Some(max), true) = (min, max, exact) else {
            return None;
        };
        if TEMPERATURE_COMPARATOR.is_greater_than(&min, &max) {
            ctx.at("max", |ctx| {
                ctx.report(IssueCode::Custom, "Range maximum must not be below its minimum");
            });
            return None;
        }
        Some(TemperatureRange::new(min, max))
    }
}

/// `{red, green, blue: 0..=255, alpha?: 0..=1}`
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbColorSchema;

const CHANNEL: IntegerSchema = IntegerSchema::between(0, 255);

impl Schema for RgbColorSchema {
    type Output = RgbColor;

    fn describe(&self) -> String {
        "rgb color".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<RgbColor> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let red = fields.field("red", &CHANNEL, ctx);
        let green = fields.field("green", &CHANNEL, ctx);
        let blue = fields.field("blue", &CHANNEL, ctx);
        let alpha = fields.field("alpha", &Optional(NumberSchema::between(0.0, 1.0)), ctx);
        let exact = fields.finish(ctx);
        let (Some(red), Some(green), Some(blue), Some(alpha), true) =
            (red, green, blue, alpha, exact)
        else {
            return None;
        };
        // Bounds were checked above, so the narrowing casts are lossless.
        Some(RgbColor {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
            alpha,
        })
    }
}

/// `{x: number, y: number}`
#[derive(Debug, Clone, Copy, Default)]
pub struct XyCoordinateSchema;

impl Schema for XyCoordinateSchema {
    type Output = XyCoordinate;

    fn describe(&self) -> String {
        "xy coordinate".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<XyCoordinate> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let x = fields.field("x", &NumberSchema::any(), ctx);
        let y = fields.field("y", &NumberSchema::any(), ctx);
        let exact = fields.finish(ctx);
        let (Some(x), Some(y), true) = (x, y, exact) else {
            return None;
        };
        Some(XyCoordinate::new(x, y))
    }
}

/// `{iconPath: string, accentColor: rgb color}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationSchema;

impl Schema for PresentationSchema {
    type Output = Presentation;

    fn describe(&self) -> String {
        "presentation".into()
    }

    fn check(&self, value: &Value, ctx: &mut Context) -> Option<Presentation> {
        let mut fields = ObjectFields::open(value, ctx)?;
        let icon_path = fields.field("iconPath", &StringSchema::non_empty(), ctx);
        let accent_color = fields.field("accentColor", &RgbColorSchema, ctx);
        let exact = fields.finish(ctx);
        let (Some(icon_path), Some(accent_color), true) = (icon_path, accent_color, exact) else {
            return None;
        };
        Some(Presentation {
            icon_path,
            accent_color,
        })
    }
}

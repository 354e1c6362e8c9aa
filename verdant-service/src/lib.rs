//! Verdant service boundary.
//!
//! Everything between untrusted input and the pure model crates:
//! - [`boundary`]: inbound parsing, outbound shaping and error translation
//! - [`error`]: [`ServiceError`] and the [`ErrorResponse`] body
//! - [`config`] and [`features`]: startup configuration and feature flags
//! - [`refine`]: async refinements layered on schema validation
//! - [`planting`]: planting dates from location temperature ranges

pub mod boundary;
pub mod config;
pub mod error;
pub mod features;
pub mod planting;
pub mod refine;

pub use boundary::{
    parse_inbound, require_param, respond_with_error, validate_inbound, validate_outbound,
};
pub use config::ServiceConfig;
pub use error::{ErrorResponse, ServiceError, ServiceResult};
pub use features::{FeatureLookup, FeatureSet, FeatureState};
pub use planting::{
    calculate_planting_date, planting_date_response, planting_months, CalculateDateRequest,
    CalculateDateRequestSchema, PlantingDateResponse, CALCULATE_DATE_REQUEST_SCHEMA,
};
pub use refine::{validate_async, AsyncRefinement, IndicatorTargetsExist};

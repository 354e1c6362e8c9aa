//! Asynchronous refinements run after structural validation.
//!
//! A refinement checks something the schema cannot see on its own, such as
//! whether the ids an entity mentions exist. Its failure is wrapped in
//! [`ServiceError::AsyncValidation`] with the original error kept as source.

use serde_json::Value;
use std::collections::HashSet;
use std::future::Future;
use thiserror::Error;
use verdant_model::{Garden, Identified, Schema};

use crate::error::{ServiceError, ServiceResult};

pub type RefineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A check over an already-validated value.
pub trait AsyncRefinement<T: ?Sized>: Send + Sync {
    fn refine(&self, value: &T) -> impl Future<Output = Result<(), RefineError>> + Send;
}

/// Validates `value` against `schema`, then awaits `refinement` on the result.
///
/// Structural failures come back as `SchemaValidation`; refinement failures as
/// `AsyncValidation`.
pub async fn validate_async<S, R>(
    schema: &S,
    value: &Value,
    refinement: &R,
) -> ServiceResult<S::Output>
where
    S: Schema,
    R: AsyncRefinement<S::Output>,
{
    let parsed = schema.parse(value)?;
    refinement
        .refine(&parsed)
        .await
        .map_err(ServiceError::async_validation)?;
    Ok(parsed)
}

/// An indicator effect names an item that is not in the garden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("indicator {indicator} references unknown item '{item_id}'")]
pub struct DanglingIndicator {
    pub indicator: String,
    pub item_id: String,
}

/// Every indicator effect must point at items placed somewhere in the garden.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorTargetsExist;

impl AsyncRefinement<Garden> for IndicatorTargetsExist {
    async fn refine(&self, garden: &Garden) -> Result<(), RefineError> {
        let placed: HashSet<&str> = garden
            .placements()
            .map(|placement| placement.item.entity_id())
            .collect();
        for indicator in &garden.indicators {
            for effect in &indicator.effects {
                for item_id in [&effect.source_id, &effect.target_id] {
                    if !placed.contains(item_id.as_str()) {
                        return Err(Box::new(DanglingIndicator {
                            indicator: indicator.id.clone(),
                            item_id: item_id.clone(),
                        }));
                    }
                }
            }
        }
        Ok(())
    }
}

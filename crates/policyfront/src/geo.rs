//! Geolocation seam.
//!
//! Profile updates may carry device coordinates. The position source is a
//! trait so the core stays testable; [`locate_with`] applies the product
//! rule that a failed lookup degrades to manual entry instead of erroring.

use crate::model::GeoPoint;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("geolocation unavailable: {0}")]
pub struct GeoError(pub String);

/// A source of device coordinates.
#[async_trait]
pub trait Locator: Send + Sync {
    async fn locate(&self) -> Result<GeoPoint, GeoError>;
}

/// Asks `locator` for coordinates, degrading any failure to `None` with a
/// warning log.
pub async fn locate_with(locator: &dyn Locator) -> Option<GeoPoint> {
    match locator.locate().await {
        Ok(point) => Some(point),
        Err(e) => {
            warn!(error = %e, "Geolocation failed, falling back to manual entry");
            None
        }
    }
}

/// Locator pinned to fixed coordinates.
pub struct FixedLocator(pub GeoPoint);

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Result<GeoPoint, GeoError> {
        Ok(self.0)
    }
}

/// Locator that always fails, for environments without a position source.
pub struct UnavailableLocator;

#[async_trait]
impl Locator for UnavailableLocator {
    async fn locate(&self) -> Result<GeoPoint, GeoError> {
        Err(GeoError("no position source".into()))
    }
}

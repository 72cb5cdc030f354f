//! One-shot location lookup: permission, then position, then reverse geocode.
//!
//! The result only feeds a display label. Any failure becomes a localized
//! fallback text and never gates check-in or check-out.

use crate::config::LocationConfig;
use crate::errors::LocationError;
use crate::models::locale::Locale;
use crate::models::location::{Address, Coordinates, LocationStatus, Permission};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn request_permission(&self) -> Permission;
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
    async fn reverse_geocode(&self, at: Coordinates) -> Result<Vec<Address>, LocationError>;
}

/// Run the lookup chain once and build the label from the first address.
pub async fn lookup_label(service: &dyn LocationService) -> Result<String, LocationError> {
    if !service.request_permission().await.is_granted() {
        return Err(LocationError::PermissionDenied);
    }

    let position = service.current_position().await?;
    debug!(
        latitude = position.latitude,
        longitude = position.longitude,
        "Position acquired"
    );

    let addresses = service.reverse_geocode(position).await?;
    addresses
        .first()
        .and_then(Address::label)
        .ok_or_else(|| LocationError::Unavailable("no address for current position".into()))
}

/// `lookup_label` bounded by `timeout`; expiry counts as unavailable.
/// `None` waits as long as the service takes.
pub async fn resolve_label(
    service: &dyn LocationService,
    timeout: Option<Duration>,
) -> Result<String, LocationError> {
    let res = match timeout {
        Some(limit) => match tokio::time::timeout(limit, lookup_label(service)).await {
            Ok(res) => res,
            Err(_) => Err(LocationError::Unavailable(format!(
                "timed out after {}s",
                limit.as_secs_f32()
            ))),
        },
        None => lookup_label(service).await,
    };

    if let Err(e) = &res {
        warn!(error = %e, "Location lookup failed");
    }
    res
}

/// Text shown in the location field for a lookup state.
pub fn location_text(status: &LocationStatus, locale: &Locale) -> String {
    match status {
        LocationStatus::Pending => locale.location_pending.to_string(),
        LocationStatus::Resolved(label) => label.clone(),
        LocationStatus::Failed(LocationError::PermissionDenied) => {
            locale.location_denied.to_string()
        }
        LocationStatus::Failed(LocationError::Unavailable(_)) => {
            locale.location_unavailable.to_string()
        }
    }
}

/// Location service backed by the `location` section of the config file.
/// Without that section the permission is reported as denied.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocationService {
    config: Option<LocationConfig>,
}

impl ConfiguredLocationService {
    pub fn new(config: Option<LocationConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl LocationService for ConfiguredLocationService {
    async fn request_permission(&self) -> Permission {
        match &self.config {
            Some(c) if c.permission_granted => Permission::Granted,
            _ => Permission::Denied,
        }
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let cfg = self
            .config
            .as_ref()
            .ok_or_else(|| LocationError::Unavailable("no location configured".into()))?;

        match (cfg.latitude, cfg.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(LocationError::Unavailable(
                "latitude/longitude not configured".into(),
            )),
        }
    }

    async fn reverse_geocode(&self, _at: Coordinates) -> Result<Vec<Address>, LocationError> {
        let Some(cfg) = &self.config else {
            return Ok(Vec::new());
        };

        let address = Address {
            city: cfg.city.clone(),
            district: cfg.district.clone(),
            street: cfg.street.clone(),
        };

        if address.label().is_none() {
            return Ok(Vec::new());
        }
        Ok(vec![address])
    }
}

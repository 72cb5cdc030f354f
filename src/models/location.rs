use crate::errors::LocationError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Permission {
    Granted,
    Denied,
}

impl Permission {
    pub fn is_granted(&self) -> bool {
        matches!(self, Permission::Granted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One reverse-geocoding result. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub city: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
}

impl Address {
    /// Non-empty parts among city, district and street, joined by one space.
    /// `None` when all three are empty.
    pub fn label(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.district, &self.street]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Display state of the one-shot location lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationStatus {
    #[default]
    Pending,
    Resolved(String),
    Failed(LocationError),
}

impl LocationStatus {
    pub fn from_result(res: Result<String, LocationError>) -> Self {
        match res {
            Ok(label) => LocationStatus::Resolved(label),
            Err(e) => LocationStatus::Failed(e),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LocationStatus::Pending)
    }
}

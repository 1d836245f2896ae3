//! Vehicle trait - common interface for all vehicle types

use serde::{Deserialize, Serialize};

use crate::core::event::{Event, Route};

/// Vehicle type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Bus,
    Truck,
    Bicycle,
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleKind::Bus => write!(f, "bus"),
            VehicleKind::Truck => write!(f, "truck"),
            VehicleKind::Bicycle => write!(f, "bicycle"),
        }
    }
}

impl std::str::FromStr for VehicleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bus" => Ok(VehicleKind::Bus),
            "truck" => Ok(VehicleKind::Truck),
            "bicycle" | "bike" => Ok(VehicleKind::Bicycle),
            _ => Err(format!("Unknown vehicle kind: {}", s)),
        }
    }
}

impl VehicleKind {
    /// Route this kind of vehicle travels on
    pub fn route(self) -> Route {
        match self {
            VehicleKind::Bus => Route::Urban,
            VehicleKind::Truck => Route::Highway,
            VehicleKind::Bicycle => Route::BikePath,
        }
    }
}

/// Identity shared by every vehicle, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    brand: String,
    capacity: u32,
}

impl Identity {
    pub fn new(brand: impl Into<String>, capacity: u32) -> Self {
        Self {
            brand: brand.into(),
            capacity,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// Common trait for all fleet vehicles
///
/// Implementors only supply their identity, kind and movement report;
/// accessors and `display_info` come for free.
pub trait Vehicle {
    /// Shared identity fields
    fn identity(&self) -> &Identity;

    /// The vehicle's kind
    fn kind(&self) -> VehicleKind;

    /// Report the vehicle travelling along its route
    fn drive(&self) -> Event;

    fn brand(&self) -> &str {
        self.identity().brand()
    }

    /// General-purpose capacity; passenger seats for a bus
    fn capacity(&self) -> u32 {
        self.identity().capacity()
    }

    /// Report brand and capacity
    fn display_info(&self) -> Event {
        Event::Info {
            brand: self.brand().to_string(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [VehicleKind::Bus, VehicleKind::Truck, VehicleKind::Bicycle] {
            let parsed: VehicleKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!("BIKE".parse::<VehicleKind>().unwrap(), VehicleKind::Bicycle);
        assert!("tram".parse::<VehicleKind>().is_err());
    }

    #[test]
    fn test_kind_routes() {
        assert_eq!(VehicleKind::Bus.route(), Route::Urban);
        assert_eq!(VehicleKind::Truck.route(), Route::Highway);
        assert_eq!(VehicleKind::Bicycle.route(), Route::BikePath);
    }

    #[test]
    fn test_identity_accessors() {
        let id = Identity::new("Mercedes", 50);
        assert_eq!(id.brand(), "Mercedes");
        assert_eq!(id.capacity(), 50);
    }
}

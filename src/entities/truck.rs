//! Truck entity - bulk cargo on the highway

use serde::Serialize;

use crate::core::event::Event;
use crate::core::loadable::{is_valid_weight, Loadable};
use crate::core::vehicle::{Identity, Vehicle, VehicleKind};

/// Truck entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Truck {
    #[serde(flatten)]
    identity: Identity,

    /// Maximum cargo in kg, fixed at construction
    max_load: f64,

    /// Current cargo in kg
    current_load: f64,
}

impl Truck {
    pub fn new(brand: impl Into<String>, capacity: u32, max_load: f64) -> Self {
        Self {
            identity: Identity::new(brand, capacity),
            max_load,
            current_load: 0.0,
        }
    }
}

impl Vehicle for Truck {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn drive(&self) -> Event {
        Event::Moving {
            kind: VehicleKind::Truck,
            brand: self.brand().to_string(),
            route: VehicleKind::Truck.route(),
            load: Some(self.current_load),
        }
    }
}

impl Loadable for Truck {
    fn load_cargo(&mut self, weight: f64) -> Event {
        if !is_valid_weight(weight) {
            return Event::InvalidWeight { weight };
        }
        if self.current_load + weight <= self.max_load {
            self.current_load += weight;
            Event::Loaded {
                kind: VehicleKind::Truck,
                weight,
                current: self.current_load,
            }
        } else {
            Event::Overloaded {
                kind: VehicleKind::Truck,
                max: self.max_load,
            }
        }
    }

    /// Always reports, even when the truck is already empty
    fn unload_cargo(&mut self) -> Option<Event> {
        let amount = self.current_load;
        self.current_load = 0.0;
        Some(Event::Unloaded {
            kind: VehicleKind::Truck,
            amount,
        })
    }

    fn current_load(&self) -> f64 {
        self.current_load
    }

    fn max_load(&self) -> f64 {
        self.max_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_scenario() {
        let mut truck = Truck::new("Volvo", 2, 15000.0);

        assert!(truck.load_cargo(5000.0).is_accepted());
        assert_eq!(truck.current_load(), 5000.0);

        assert_eq!(
            truck.load_cargo(8000.0),
            Event::Loaded {
                kind: VehicleKind::Truck,
                weight: 8000.0,
                current: 13000.0
            }
        );

        // 13000 + 3000 > 15000
        assert_eq!(
            truck.load_cargo(3000.0),
            Event::Overloaded {
                kind: VehicleKind::Truck,
                max: 15000.0
            }
        );
        assert_eq!(truck.current_load(), 13000.0);

        assert_eq!(
            truck.unload_cargo(),
            Some(Event::Unloaded {
                kind: VehicleKind::Truck,
                amount: 13000.0
            })
        );
        assert_eq!(truck.current_load(), 0.0);
    }

    #[test]
    fn test_unload_empty_truck_still_reports() {
        let mut truck = Truck::new("Volvo", 2, 100.0);
        assert_eq!(
            truck.unload_cargo(),
            Some(Event::Unloaded {
                kind: VehicleKind::Truck,
                amount: 0.0
            })
        );
    }

    #[test]
    fn test_load_to_exact_max() {
        let mut truck = Truck::new("Scania", 3, 100.0);
        assert!(truck.load_cargo(100.0).is_accepted());
        assert!(!truck.load_cargo(0.5).is_accepted());
        assert_eq!(truck.current_load(), 100.0);
        assert_eq!(truck.max_load(), 100.0);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut truck = Truck::new("Volvo", 2, 100.0);
        truck.load_cargo(40.0);
        assert_eq!(truck.load_cargo(-10.0), Event::InvalidWeight { weight: -10.0 });
        assert!(matches!(truck.load_cargo(f64::NAN), Event::InvalidWeight { .. }));
        assert_eq!(truck.current_load(), 40.0);
    }

    #[test]
    fn test_drive_reports_load() {
        let mut truck = Truck::new("Volvo", 2, 15000.0);
        truck.load_cargo(13000.0);
        match truck.drive() {
            Event::Moving { load, .. } => assert_eq!(load, Some(13000.0)),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(truck.capacity(), 2);
    }
}

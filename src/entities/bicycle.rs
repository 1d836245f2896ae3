//! Bicycle entity - small cargo in an optional basket

use serde::Serialize;

use crate::core::event::Event;
use crate::core::loadable::{is_valid_weight, Loadable};
use crate::core::vehicle::{Identity, Vehicle, VehicleKind};

/// Max load with a basket, kg
pub const BASKET_MAX_LOAD: f64 = 10.0;

/// Max load without a basket, kg. Unreachable for positive weights since
/// basket-less bicycles refuse all cargo.
pub const BARE_MAX_LOAD: f64 = 5.0;

/// A bicycle always seats its rider
const BICYCLE_CAPACITY: u32 = 1;

/// Bicycle entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bicycle {
    #[serde(flatten)]
    identity: Identity,
    has_basket: bool,
    max_load: f64,
    current_load: f64,
}

impl Bicycle {
    pub fn new(brand: impl Into<String>, has_basket: bool) -> Self {
        Self {
            identity: Identity::new(brand, BICYCLE_CAPACITY),
            has_basket,
            max_load: if has_basket {
                BASKET_MAX_LOAD
            } else {
                BARE_MAX_LOAD
            },
            current_load: 0.0,
        }
    }

    pub fn has_basket(&self) -> bool {
        self.has_basket
    }
}

impl Vehicle for Bicycle {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bicycle
    }

    fn drive(&self) -> Event {
        Event::Moving {
            kind: VehicleKind::Bicycle,
            brand: self.brand().to_string(),
            route: VehicleKind::Bicycle.route(),
            load: None,
        }
    }
}

impl Loadable for Bicycle {
    fn load_cargo(&mut self, weight: f64) -> Event {
        if !is_valid_weight(weight) {
            return Event::InvalidWeight { weight };
        }
        // Zero weight passes the basket gate and goes through the threshold check
        if !self.has_basket && weight > 0.0 {
            return Event::NoBasket;
        }
        if self.current_load + weight <= self.max_load {
            self.current_load += weight;
            Event::Loaded {
                kind: VehicleKind::Bicycle,
                weight,
                current: self.current_load,
            }
        } else {
            Event::Overloaded {
                kind: VehicleKind::Bicycle,
                max: self.max_load,
            }
        }
    }

    fn unload_cargo(&mut self) -> Option<Event> {
        if self.current_load <= 0.0 {
            return None;
        }
        let amount = self.current_load;
        self.current_load = 0.0;
        Some(Event::Unloaded {
            kind: VehicleKind::Bicycle,
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
    fn test_max_load_depends_on_basket() {
        assert_eq!(Bicycle::new("Giant", true).max_load(), 10.0);
        assert_eq!(Bicycle::new("Giant", false).max_load(), 5.0);
        assert_eq!(Bicycle::new("Giant", false).capacity(), 1);
    }

    #[test]
    fn test_bicycle_scenario() {
        let mut bike = Bicycle::new("Giant", true);

        assert_eq!(
            bike.load_cargo(7.0),
            Event::Loaded {
                kind: VehicleKind::Bicycle,
                weight: 7.0,
                current: 7.0
            }
        );

        // 7 + 5 > 10
        assert_eq!(
            bike.load_cargo(5.0),
            Event::Overloaded {
                kind: VehicleKind::Bicycle,
                max: 10.0
            }
        );
        assert_eq!(bike.current_load(), 7.0);

        assert!(bike.unload_cargo().is_some());
        assert_eq!(bike.current_load(), 0.0);
    }

    #[test]
    fn test_no_basket_refuses_any_positive_weight() {
        let mut bike = Bicycle::new("Trek", false);
        for weight in [0.1, 1.0, 4.9, 5.0, 50.0] {
            assert_eq!(bike.load_cargo(weight), Event::NoBasket);
            assert_eq!(bike.current_load(), 0.0);
        }
    }

    #[test]
    fn test_no_basket_zero_weight_passes_gate() {
        let mut bike = Bicycle::new("Trek", false);
        assert!(bike.load_cargo(0.0).is_accepted());
        assert_eq!(bike.current_load(), 0.0);
    }

    #[test]
    fn test_unload_empty_is_silent() {
        let mut bike = Bicycle::new("Giant", true);
        assert_eq!(bike.unload_cargo(), None);
        bike.load_cargo(2.5);
        assert_eq!(
            bike.unload_cargo(),
            Some(Event::Unloaded {
                kind: VehicleKind::Bicycle,
                amount: 2.5
            })
        );
        assert_eq!(bike.unload_cargo(), None);
    }

    #[test]
    fn test_negative_weight_rejected_before_basket_gate() {
        let mut bike = Bicycle::new("Trek", false);
        assert_eq!(bike.load_cargo(-3.0), Event::InvalidWeight { weight: -3.0 });
        assert_eq!(bike.current_load(), 0.0);
    }
}

//! Bus entity - passenger vehicle on an urban route

use serde::Serialize;

use crate::core::event::Event;
use crate::core::vehicle::{Identity, Vehicle, VehicleKind};

/// Bus entity
///
/// Capacity is the number of seats; `passenger_count` never exceeds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bus {
    #[serde(flatten)]
    identity: Identity,
    passenger_count: u32,
}

impl Bus {
    /// Create an empty bus with `capacity` seats
    pub fn new(brand: impl Into<String>, capacity: u32) -> Self {
        Self {
            identity: Identity::new(brand, capacity),
            passenger_count: 0,
        }
    }

    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    /// Admit all `count` passengers, or none of them if they don't fit
    pub fn board_passengers(&mut self, count: u32) -> Event {
        let capacity = self.capacity();
        match self.passenger_count.checked_add(count) {
            Some(total) if total <= capacity => {
                self.passenger_count = total;
                Event::Boarded { count, total }
            }
            _ => Event::BoardingRefused { capacity },
        }
    }

    /// Let `count` passengers off; silently ignored if fewer are aboard
    pub fn drop_passengers(&mut self, count: u32) -> Option<Event> {
        if count > self.passenger_count {
            return None;
        }
        self.passenger_count -= count;
        Some(Event::Dropped {
            count,
            remaining: self.passenger_count,
        })
    }
}

impl Vehicle for Bus {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bus
    }

    fn drive(&self) -> Event {
        Event::Moving {
            kind: VehicleKind::Bus,
            brand: self.brand().to_string(),
            route: VehicleKind::Bus.route(),
            load: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Route;

    #[test]
    fn test_bus_creation() {
        let bus = Bus::new("Mercedes", 50);
        assert_eq!(bus.brand(), "Mercedes");
        assert_eq!(bus.capacity(), 50);
        assert_eq!(bus.passenger_count(), 0);
        assert_eq!(bus.kind(), VehicleKind::Bus);
    }

    #[test]
    fn test_bus_scenario() {
        let mut bus = Bus::new("Mercedes", 50);

        assert_eq!(bus.board_passengers(30), Event::Boarded { count: 30, total: 30 });
        assert_eq!(bus.passenger_count(), 30);

        // 30 + 25 > 50: whole group refused
        assert_eq!(bus.board_passengers(25), Event::BoardingRefused { capacity: 50 });
        assert_eq!(bus.passenger_count(), 30);

        assert_eq!(
            bus.drop_passengers(15),
            Some(Event::Dropped { count: 15, remaining: 15 })
        );
        assert_eq!(bus.passenger_count(), 15);
    }

    #[test]
    fn test_board_exactly_to_capacity() {
        let mut bus = Bus::new("MAN", 10);
        assert!(bus.board_passengers(10).is_accepted());
        assert_eq!(bus.passenger_count(), 10);
        assert!(!bus.board_passengers(1).is_accepted());
        assert_eq!(bus.passenger_count(), 10);
    }

    #[test]
    fn test_board_overflow_is_refused() {
        let mut bus = Bus::new("MAN", u32::MAX);
        bus.board_passengers(5);
        assert_eq!(
            bus.board_passengers(u32::MAX),
            Event::BoardingRefused { capacity: u32::MAX }
        );
        assert_eq!(bus.passenger_count(), 5);
    }

    #[test]
    fn test_drop_too_many_is_silent() {
        let mut bus = Bus::new("Mercedes", 50);
        bus.board_passengers(5);
        assert_eq!(bus.drop_passengers(6), None);
        assert_eq!(bus.passenger_count(), 5);
        assert_eq!(
            bus.drop_passengers(5),
            Some(Event::Dropped { count: 5, remaining: 0 })
        );
        assert_eq!(bus.drop_passengers(0), Some(Event::Dropped { count: 0, remaining: 0 }));
    }

    #[test]
    fn test_bus_drive_and_info() {
        let bus = Bus::new("Mercedes", 50);
        match bus.drive() {
            Event::Moving { route, load, brand, .. } => {
                assert_eq!(route, Route::Urban);
                assert_eq!(load, None);
                assert_eq!(brand, "Mercedes");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(
            bus.display_info(),
            Event::Info {
                brand: "Mercedes".to_string(),
                capacity: 50
            }
        );
    }
}

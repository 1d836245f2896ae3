//! Transport sum type and the Fleet collection

use serde::Serialize;

use crate::core::event::Event;
use crate::core::loadable::Loadable;
use crate::core::vehicle::{Identity, Vehicle, VehicleKind};
use crate::entities::{Bicycle, Bus, Truck};

/// Any vehicle the company owns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transport {
    Bus(Bus),
    Truck(Truck),
    Bicycle(Bicycle),
}

impl Transport {
    fn as_vehicle(&self) -> &dyn Vehicle {
        match self {
            Transport::Bus(bus) => bus,
            Transport::Truck(truck) => truck,
            Transport::Bicycle(bike) => bike,
        }
    }

    /// Cargo capability, if this vehicle has one
    pub fn as_loadable(&self) -> Option<&dyn Loadable> {
        match self {
            Transport::Bus(_) => None,
            Transport::Truck(truck) => Some(truck),
            Transport::Bicycle(bike) => Some(bike),
        }
    }

    pub fn as_loadable_mut(&mut self) -> Option<&mut dyn Loadable> {
        match self {
            Transport::Bus(_) => None,
            Transport::Truck(truck) => Some(truck),
            Transport::Bicycle(bike) => Some(bike),
        }
    }

    pub fn as_bus_mut(&mut self) -> Option<&mut Bus> {
        match self {
            Transport::Bus(bus) => Some(bus),
            _ => None,
        }
    }
}

impl Vehicle for Transport {
    fn identity(&self) -> &Identity {
        self.as_vehicle().identity()
    }

    fn kind(&self) -> VehicleKind {
        self.as_vehicle().kind()
    }

    fn drive(&self) -> Event {
        self.as_vehicle().drive()
    }
}

impl From<Bus> for Transport {
    fn from(bus: Bus) -> Self {
        Transport::Bus(bus)
    }
}

impl From<Truck> for Transport {
    fn from(truck: Truck) -> Self {
        Transport::Truck(truck)
    }
}

impl From<Bicycle> for Transport {
    fn from(bike: Bicycle) -> Self {
        Transport::Bicycle(bike)
    }
}

/// A vehicle registered in a fleet under a unique id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetEntry {
    pub id: String,
    pub vehicle: Transport,
}

/// Named collection of vehicles, in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle; returns false if the id is already taken
    pub fn add(&mut self, id: impl Into<String>, vehicle: impl Into<Transport>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.entries.push(FleetEntry {
            id,
            vehicle: vehicle.into(),
        });
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Transport> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.vehicle)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Transport> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.vehicle)
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of current cargo across the fleet, kg
    pub fn total_load(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| e.vehicle.as_loadable())
            .map(|l| l.current_load())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add("city", Bus::new("Mercedes", 50));
        fleet.add("hauler", Truck::new("Volvo", 2, 15000.0));
        fleet.add("bike", Bicycle::new("Giant", true));
        fleet
    }

    #[test]
    fn test_fleet_rejects_duplicate_ids() {
        let mut fleet = sample_fleet();
        assert!(!fleet.add("city", Bus::new("MAN", 40)));
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.get("city").unwrap().brand(), "Mercedes");
    }

    #[test]
    fn test_transport_delegates() {
        let fleet = sample_fleet();
        let kinds: Vec<VehicleKind> = fleet
            .entries()
            .iter()
            .map(|e| e.vehicle.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![VehicleKind::Bus, VehicleKind::Truck, VehicleKind::Bicycle]
        );
        let capacities: Vec<u32> = fleet
            .entries()
            .iter()
            .map(|e| e.vehicle.capacity())
            .collect();
        assert_eq!(capacities, vec![50, 2, 1]);
    }

    #[test]
    fn test_total_load_skips_bus() {
        let mut fleet = sample_fleet();
        for id in ["city", "hauler", "bike"] {
            if let Some(cargo) = fleet.get_mut(id).and_then(Transport::as_loadable_mut) {
                assert!(cargo.load_cargo(5.0).is_accepted());
            }
        }
        assert_eq!(fleet.total_load(), 10.0);
    }

    #[test]
    fn test_capability_lookup() {
        let mut fleet = sample_fleet();
        assert!(fleet.get("city").unwrap().as_loadable().is_none());
        assert!(fleet.get_mut("city").unwrap().as_bus_mut().is_some());
        assert!(fleet.get_mut("hauler").unwrap().as_bus_mut().is_none());
        assert!(fleet.get("nope").is_none());
    }

    #[test]
    fn test_fleet_serializes_with_type_tag() {
        let fleet = sample_fleet();
        let json = serde_json::to_value(&fleet).unwrap();
        let first = &json["entries"][0];
        assert_eq!(first["id"], "city");
        assert_eq!(first["vehicle"]["type"], "bus");
        assert_eq!(first["vehicle"]["brand"], "Mercedes");
        assert_eq!(json["entries"][2]["vehicle"]["has_basket"], true);
    }
}

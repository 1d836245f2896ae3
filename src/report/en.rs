//! English messages

use crate::cli::helpers::format_kg;
use crate::core::event::{Event, Reading, Section};
use crate::core::vehicle::VehicleKind;

pub(super) fn section(section: &Section) -> String {
    match section {
        Section::Title => "=== TRANSPORT COMPANY ===".to_string(),
        Section::Polymorphism => "--- Polymorphism: every vehicle moves ---".to_string(),
        Section::Bus => "--- Working with the bus ---".to_string(),
        Section::Truck => "--- Working with the truck ---".to_string(),
        Section::Bicycle => "--- Working with the bicycle ---".to_string(),
        Section::Cargo => "--- Polymorphism: loading cargo ---".to_string(),
        Section::Encapsulation => "--- Encapsulation ---".to_string(),
        Section::Custom(title) => format!("--- {} ---", title),
    }
}

pub(super) fn event(event: &Event) -> String {
    match event {
        Event::Info { brand, capacity } => {
            format!("Vehicle: {}, capacity: {}", brand, capacity)
        }
        Event::Moving {
            kind, brand, load, ..
        } => match kind {
            VehicleKind::Bus => format!("Bus {} is travelling on an urban route", brand),
            VehicleKind::Truck => format!(
                "Truck {} is travelling on the highway with {} kg of cargo",
                brand,
                format_kg(load.unwrap_or_default())
            ),
            VehicleKind::Bicycle => format!("Bicycle {} is riding on a bike path", brand),
        },
        Event::Boarded { count, total } => {
            format!("{} passengers boarded the bus. Total: {}", count, total)
        }
        Event::BoardingRefused { capacity } => {
            format!("Not enough seats! Maximum: {}", capacity)
        }
        Event::Dropped { count, remaining } => {
            format!("{} passengers left the bus. Remaining: {}", count, remaining)
        }
        Event::Loaded {
            kind: VehicleKind::Bicycle,
            weight,
            current,
        } => format!(
            "Loaded {} kg into the basket. Current load: {} kg",
            format_kg(*weight),
            format_kg(*current)
        ),
        Event::Loaded {
            weight, current, ..
        } => format!(
            "Loaded {} kg. Current load: {} kg",
            format_kg(*weight),
            format_kg(*current)
        ),
        Event::Overloaded {
            kind: VehicleKind::Bicycle,
            max,
        } => format!("Basket is full! Maximum: {} kg", format_kg(*max)),
        Event::Overloaded { max, .. } => format!("Overloaded! Maximum: {} kg", format_kg(*max)),
        Event::NoBasket => "The bicycle has no basket for cargo!".to_string(),
        Event::InvalidWeight { weight } => {
            format!("Invalid cargo weight: {} kg", format_kg(*weight))
        }
        Event::Unloaded {
            kind: VehicleKind::Bicycle,
            amount,
        } => format!("Unloaded {} kg from the basket", format_kg(*amount)),
        Event::Unloaded { amount, .. } => format!("Unloaded {} kg", format_kg(*amount)),
    }
}

pub(super) fn reading(reading: &Reading) -> String {
    match reading {
        Reading::MaxLoad { kg } => format!("Maximum load: {} kg", format_kg(*kg)),
        Reading::CurrentLoad { kg } => format!("Current load: {} kg", format_kg(*kg)),
        Reading::Brand { kind, brand } => {
            let noun = match kind {
                VehicleKind::Bus => "Bus",
                VehicleKind::Truck => "Truck",
                VehicleKind::Bicycle => "Bicycle",
            };
            format!("{} brand: {}", noun, brand)
        }
        Reading::Capacity { capacity } => format!("Capacity: {}", capacity),
        Reading::Passengers { count, capacity } => {
            format!("Passengers: {}/{}", count, capacity)
        }
    }
}

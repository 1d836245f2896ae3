//! Events, readings and transcripts
//!
//! Vehicle operations never print. They mutate their own counters and return
//! an [`Event`] describing what happened; drivers collect these into a
//! [`Transcript`] which is rendered afterwards.

use serde::Serialize;

use crate::core::vehicle::VehicleKind;

/// Route a vehicle travels on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Urban,
    Highway,
    BikePath,
}

/// Outcome of a vehicle operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Brand and capacity
    Info { brand: String, capacity: u32 },

    /// Vehicle is travelling; `load` is only reported by trucks
    Moving {
        kind: VehicleKind,
        brand: String,
        route: Route,
        #[serde(skip_serializing_if = "Option::is_none")]
        load: Option<f64>,
    },

    /// Passengers admitted
    Boarded { count: u32, total: u32 },

    /// Boarding request refused as a whole
    BoardingRefused { capacity: u32 },

    /// Passengers left the bus
    Dropped { count: u32, remaining: u32 },

    /// Cargo accepted
    Loaded {
        kind: VehicleKind,
        weight: f64,
        current: f64,
    },

    /// Cargo refused, it would exceed `max`
    Overloaded { kind: VehicleKind, max: f64 },

    /// Bicycle without a basket refused cargo
    NoBasket,

    /// Negative or non-finite weight refused
    InvalidWeight { weight: f64 },

    /// Cargo cleared
    Unloaded { kind: VehicleKind, amount: f64 },
}

impl Event {
    /// Whether the operation that produced this event changed vehicle state
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Event::Boarded { .. }
                | Event::Dropped { .. }
                | Event::Loaded { .. }
                | Event::Unloaded { .. }
        )
    }
}

/// Plain accessor readings reported by drivers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reading", rename_all = "snake_case")]
pub enum Reading {
    MaxLoad { kg: f64 },
    CurrentLoad { kg: f64 },
    Brand { kind: VehicleKind, brand: String },
    Capacity { capacity: u32 },
    Passengers { count: u32, capacity: u32 },
}

/// Transcript section headings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Title,
    Polymorphism,
    Bus,
    Truck,
    Bicycle,
    Cargo,
    Encapsulation,
    /// Free-form heading, e.g. a scenario title
    Custom(String),
}

/// One line of a transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Heading { section: Section },
    Event(Event),
    Reading(Reading),
    Blank,
}

/// Ordered record of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, section: Section) {
        self.entries.push(Entry::Heading { section });
    }

    pub fn event(&mut self, event: Event) {
        self.entries.push(Entry::Event(event));
    }

    /// Record an event if the operation reported one
    pub fn maybe(&mut self, event: Option<Event>) {
        if let Some(event) = event {
            self.event(event);
        }
    }

    pub fn reading(&mut self, reading: Reading) {
        self.entries.push(Entry::Reading(reading));
    }

    pub fn blank(&mut self) {
        self.entries.push(Entry::Blank);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All events, in order, without headings or readings
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Event(event) => Some(event),
            _ => None,
        })
    }

    /// Entries worth serializing (blank spacing dropped)
    pub fn to_json(&self) -> serde_json::Value {
        let entries: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| !matches!(e, Entry::Blank))
            .collect();
        serde_json::to_value(entries).unwrap_or_default()
    }
}

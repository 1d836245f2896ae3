//! Core module - fundamental traits and types

pub mod config;
pub mod event;
pub mod loadable;
pub mod vehicle;

pub use config::Config;
pub use event::{Entry, Event, Reading, Route, Section, Transcript};
pub use loadable::Loadable;
pub use vehicle::{Identity, Vehicle, VehicleKind};

//! Vehicle type definitions
//!
//! The fleet supports the following vehicles:
//!
//! - [`Bus`] - Passengers on an urban route, bounded by seat capacity
//! - [`Truck`] - Bulk cargo on the highway, bounded by max load
//! - [`Bicycle`] - Small cargo in an optional basket
//!
//! [`Transport`] is the sum type over all three and [`Fleet`] a named
//! collection of them.

pub mod bicycle;
pub mod bus;
pub mod transport;
pub mod truck;

pub use bicycle::Bicycle;
pub use bus::Bus;
pub use transport::{Fleet, FleetEntry, Transport};
pub use truck::Truck;

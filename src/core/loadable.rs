//! Loadable trait - cargo capability shared by freight-carrying vehicles

use crate::core::event::Event;

/// Cargo capability
///
/// Loading and unloading always return normally: a refused load is reported
/// as an event, never as an error.
pub trait Loadable {
    /// Try to add `weight` kg to the current load
    fn load_cargo(&mut self, weight: f64) -> Event;

    /// Clear the current load; `None` when nothing was reported
    fn unload_cargo(&mut self) -> Option<Event>;

    fn current_load(&self) -> f64;

    fn max_load(&self) -> f64;
}

/// Negative, NaN and infinite weights never reach the threshold checks
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

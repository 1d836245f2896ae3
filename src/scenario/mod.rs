//! Scenario files - fleets and operations described in YAML
//!
//! A scenario declares vehicles under `vehicles:` and the operations to run
//! against them under `steps:`. Every step is checked before the first one
//! runs, so a bad file never produces partial output.

pub mod diagnostics;

use serde::Deserialize;
use std::path::Path;

use crate::core::event::{Reading, Section, Transcript};
use crate::core::loadable::{is_valid_weight, Loadable};
use crate::core::vehicle::{Vehicle, VehicleKind};
use crate::entities::{Bicycle, Bus, Fleet, Transport, Truck};

pub use diagnostics::{ScenarioError, YamlSyntaxError};

/// A parsed scenario file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Optional heading printed before the first step
    #[serde(default)]
    pub title: Option<String>,

    pub vehicles: Vec<VehicleSpec>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Vehicle declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum VehicleSpec {
    Bus {
        id: String,
        brand: String,
        capacity: u32,
    },
    Truck {
        id: String,
        brand: String,
        #[serde(default)]
        capacity: u32,
        max_load: f64,
    },
    Bicycle {
        id: String,
        brand: String,
        #[serde(default)]
        basket: bool,
    },
}

impl VehicleSpec {
    pub fn id(&self) -> &str {
        match self {
            VehicleSpec::Bus { id, .. }
            | VehicleSpec::Truck { id, .. }
            | VehicleSpec::Bicycle { id, .. } => id,
        }
    }

    fn build(&self) -> Transport {
        match self {
            VehicleSpec::Bus {
                brand, capacity, ..
            } => Bus::new(brand.clone(), *capacity).into(),
            VehicleSpec::Truck {
                brand,
                capacity,
                max_load,
                ..
            } => Truck::new(brand.clone(), *capacity, *max_load).into(),
            VehicleSpec::Bicycle { brand, basket, .. } => {
                Bicycle::new(brand.clone(), *basket).into()
            }
        }
    }

    /// Truck limit that is negative or not finite
    fn invalid_max_load(&self) -> Option<f64> {
        match self {
            VehicleSpec::Truck { max_load, .. } if !is_valid_weight(*max_load) => Some(*max_load),
            _ => None,
        }
    }
}

/// One operation against one vehicle
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct Step {
    pub vehicle: String,
    pub action: Action,
}

/// Operations a step can perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Info,
    Move,
    Status,
    Board { count: u32 },
    Drop { count: u32 },
    Load { weight: f64 },
    Unload,
}

/// Action keyword as written under `action:`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ActionName {
    Info,
    Move,
    Status,
    Board,
    Drop,
    Load,
    Unload,
}

/// A step exactly as written, before its arguments are matched to the action
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    vehicle: String,
    action: ActionName,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    weight: Option<f64>,
}

impl TryFrom<RawStep> for Step {
    type Error = String;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let action = match (raw.action, raw.count, raw.weight) {
            (ActionName::Info, None, None) => Action::Info,
            (ActionName::Move, None, None) => Action::Move,
            (ActionName::Status, None, None) => Action::Status,
            (ActionName::Unload, None, None) => Action::Unload,
            (ActionName::Board, Some(count), None) => Action::Board { count },
            (ActionName::Drop, Some(count), None) => Action::Drop { count },
            (ActionName::Load, None, Some(weight)) => Action::Load { weight },
            (ActionName::Board | ActionName::Drop, None, _) => {
                return Err("missing field `count`".to_string())
            }
            (ActionName::Load, _, None) => return Err("missing field `weight`".to_string()),
            (name, count, _) => {
                let field = match name {
                    ActionName::Board | ActionName::Drop => "weight",
                    ActionName::Load => "count",
                    _ if count.is_some() => "count",
                    _ => "weight",
                };
                return Err(format!(
                    "field `{}` does not apply to action `{}`",
                    field,
                    name.as_str()
                ));
            }
        };
        Ok(Step {
            vehicle: raw.vehicle,
            action,
        })
    }
}

impl ActionName {
    fn as_str(self) -> &'static str {
        match self {
            ActionName::Info => "info",
            ActionName::Move => "move",
            ActionName::Status => "status",
            ActionName::Board => "board",
            ActionName::Drop => "drop",
            ActionName::Load => "load",
            ActionName::Unload => "unload",
        }
    }
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Info => "info",
            Action::Move => "move",
            Action::Status => "status",
            Action::Board { .. } => "board",
            Action::Drop { .. } => "drop",
            Action::Load { .. } => "load",
            Action::Unload => "unload",
        }
    }

    /// Whether a vehicle of `kind` can perform this action
    pub fn supported_by(&self, kind: VehicleKind) -> bool {
        match self {
            Action::Info | Action::Move | Action::Status => true,
            Action::Board { .. } | Action::Drop { .. } => kind == VehicleKind::Bus,
            Action::Load { .. } | Action::Unload => kind != VehicleKind::Bus,
        }
    }
}

impl Scenario {
    /// Parse a scenario from YAML text; `filename` labels diagnostics
    pub fn parse(source: &str, filename: &str) -> Result<Self, ScenarioError> {
        serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename).into())
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source, &path.display().to_string())
    }

    /// Register every declared vehicle
    pub fn build_fleet(&self) -> Result<Fleet, ScenarioError> {
        let mut fleet = Fleet::new();
        for spec in &self.vehicles {
            if let Some(max_load) = spec.invalid_max_load() {
                return Err(ScenarioError::InvalidMaxLoad {
                    id: spec.id().to_string(),
                    max_load,
                });
            }
            if !fleet.add(spec.id(), spec.build()) {
                return Err(ScenarioError::DuplicateVehicle {
                    id: spec.id().to_string(),
                });
            }
        }
        Ok(fleet)
    }

    /// Check every step against the fleet without running anything
    pub fn validate(&self, fleet: &Fleet) -> Result<(), ScenarioError> {
        for (i, step) in self.steps.iter().enumerate() {
            let vehicle = fleet
                .get(&step.vehicle)
                .ok_or_else(|| ScenarioError::UnknownVehicle {
                    step: i + 1,
                    id: step.vehicle.clone(),
                    known: fleet
                        .entries()
                        .iter()
                        .map(|e| e.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
            if !step.action.supported_by(vehicle.kind()) {
                return Err(unsupported(i + 1, step, vehicle.kind()));
            }
        }
        Ok(())
    }

    /// Build the fleet, validate, then run every step in order
    pub fn run(&self) -> Result<(Fleet, Transcript), ScenarioError> {
        let mut fleet = self.build_fleet()?;
        self.validate(&fleet)?;

        let mut t = Transcript::new();
        if let Some(title) = &self.title {
            t.heading(Section::Custom(title.clone()));
        }
        for (i, step) in self.steps.iter().enumerate() {
            let vehicle = fleet
                .get_mut(&step.vehicle)
                .ok_or_else(|| ScenarioError::UnknownVehicle {
                    step: i + 1,
                    id: step.vehicle.clone(),
                    known: String::new(),
                })?;
            apply(vehicle, step.action, &mut t)
                .ok_or_else(|| unsupported(i + 1, step, vehicle.kind()))?;
        }
        Ok((fleet, t))
    }
}

fn unsupported(step: usize, s: &Step, kind: VehicleKind) -> ScenarioError {
    ScenarioError::UnsupportedAction {
        step,
        id: s.vehicle.clone(),
        kind,
        action: s.action.name(),
    }
}

/// Perform one action; `None` if the vehicle lacks the capability
fn apply(vehicle: &mut Transport, action: Action, t: &mut Transcript) -> Option<()> {
    match action {
        Action::Info => t.event(vehicle.display_info()),
        Action::Move => t.event(vehicle.drive()),
        Action::Status => match vehicle {
            Transport::Bus(bus) => t.reading(Reading::Passengers {
                count: bus.passenger_count(),
                capacity: bus.capacity(),
            }),
            other => {
                let cargo = other.as_loadable()?;
                t.reading(Reading::CurrentLoad {
                    kg: cargo.current_load(),
                });
                t.reading(Reading::MaxLoad {
                    kg: cargo.max_load(),
                });
            }
        },
        Action::Board { count } => t.event(vehicle.as_bus_mut()?.board_passengers(count)),
        Action::Drop { count } => t.maybe(vehicle.as_bus_mut()?.drop_passengers(count)),
        Action::Load { weight } => t.event(vehicle.as_loadable_mut()?.load_cargo(weight)),
        Action::Unload => t.maybe(vehicle.as_loadable_mut()?.unload_cargo()),
    }
    Some(())
}

//! The fixed transport company demonstration
//!
//! Builds a bus, a truck and a bicycle, exercises every operation on them and
//! records the outcome. The sequence never varies, so the transcript doubles
//! as a regression fixture.

use crate::core::event::{Reading, Section, Transcript};
use crate::core::loadable::Loadable;
use crate::core::vehicle::Vehicle;
use crate::entities::{Bicycle, Bus, Truck};

/// Run the demonstration and return what happened
pub fn run() -> Transcript {
    let mut t = Transcript::new();
    t.heading(Section::Title);
    t.blank();

    let mut bus = Bus::new("Mercedes", 50);
    let mut truck = Truck::new("Volvo", 2, 15000.0);
    let mut bicycle = Bicycle::new("Giant", true);

    t.heading(Section::Polymorphism);
    let vehicles: [&dyn Vehicle; 3] = [&bus, &truck, &bicycle];
    for v in vehicles {
        t.event(v.display_info());
        t.event(v.drive());
        t.blank();
    }

    t.heading(Section::Bus);
    t.event(bus.board_passengers(30));
    t.event(bus.drive());
    t.event(bus.board_passengers(25));
    t.maybe(bus.drop_passengers(15));
    t.blank();

    t.heading(Section::Truck);
    t.event(truck.load_cargo(5000.0));
    t.event(truck.load_cargo(8000.0));
    t.event(truck.drive());
    t.event(truck.load_cargo(3000.0));
    t.maybe(truck.unload_cargo());
    t.blank();

    t.heading(Section::Bicycle);
    t.event(bicycle.load_cargo(7.0));
    t.event(bicycle.drive());
    t.event(bicycle.load_cargo(5.0));
    t.maybe(bicycle.unload_cargo());
    t.blank();

    t.heading(Section::Cargo);
    let loadables: [&mut dyn Loadable; 2] = [&mut truck, &mut bicycle];
    for lv in loadables {
        t.reading(Reading::MaxLoad { kg: lv.max_load() });
        t.event(lv.load_cargo(5.0));
        t.reading(Reading::CurrentLoad {
            kg: lv.current_load(),
        });
        t.blank();
    }

    t.heading(Section::Encapsulation);
    t.reading(Reading::Brand {
        kind: bus.kind(),
        brand: bus.brand().to_string(),
    });
    t.reading(Reading::Capacity {
        capacity: bus.capacity(),
    });

    t
}

//! `fleet run` command - execute a YAML scenario

use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_kg, truncate_str};
use crate::cli::output::{print_transcript, Presentation};
use crate::cli::OutputFormat;
use crate::core::loadable::Loadable;
use crate::core::vehicle::Vehicle;
use crate::entities::{Fleet, Transport};
use crate::scenario::Scenario;

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Scenario file (YAML)
    pub file: PathBuf,

    /// Print the final state of every vehicle
    #[arg(long, short = 's')]
    pub summary: bool,
}

pub fn run(args: RunArgs, p: &Presentation) -> Result<()> {
    let scenario = Scenario::load(&args.file)?;
    p.debug(format!(
        "loaded {}: {} vehicles, {} steps",
        args.file.display(),
        scenario.vehicles.len(),
        scenario.steps.len()
    ));

    let (fleet, transcript) = scenario.run()?;
    let recorded = transcript.events().count();
    let accepted = transcript.events().filter(|e| e.is_accepted()).count();
    p.debug(format!("{} events recorded, {} accepted", recorded, accepted));

    match (p.format, args.summary) {
        (OutputFormat::Json, true) => {
            let doc = serde_json::json!({
                "transcript": transcript.to_json(),
                "fleet": fleet,
            });
            println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        }
        (_, summary) => {
            print_transcript(&transcript, p);
            if summary {
                if !p.quiet {
                    println!();
                }
                print!("{}", summary_table(&fleet));
            }
        }
    }

    Ok(())
}

/// Final fleet state as a table
pub fn summary_table(fleet: &Fleet) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Type", "Brand", "Capacity", "Occupancy"]);

    for entry in fleet.entries() {
        let v = &entry.vehicle;
        let kind = match v {
            Transport::Bicycle(bike) if bike.has_basket() => format!("{} (basket)", v.kind()),
            _ => v.kind().to_string(),
        };
        let occupancy = match v {
            Transport::Bus(bus) => {
                format!("{}/{} passengers", bus.passenger_count(), bus.capacity())
            }
            other => other
                .as_loadable()
                .map(|l| format!("{}/{} kg", format_kg(l.current_load()), format_kg(l.max_load())))
                .unwrap_or_default(),
        };
        builder.push_record([
            truncate_str(&entry.id, 16),
            kind,
            truncate_str(v.brand(), 20),
            v.capacity().to_string(),
            occupancy,
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        String::new(),
        "Total cargo".to_string(),
        format!("{} kg", format_kg(fleet.total_load())),
    ]);

    let mut out = builder.build().with(Style::rounded()).to_string();
    out.push('\n');
    out
}

//! `fleet demo` command - the built-in demonstration

use miette::Result;

use crate::cli::output::{print_transcript, Presentation};
use crate::demo;

pub fn run(p: &Presentation) -> Result<()> {
    p.debug(format!("running demonstration (lang: {})", p.locale));
    let transcript = demo::run();
    p.debug(format!("{} transcript entries", transcript.entries().len()));
    print_transcript(&transcript, p);
    Ok(())
}

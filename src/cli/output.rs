//! Printing transcripts to stdout

use console::style;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::event::Transcript;
use crate::core::Config;
use crate::report::{self, Line, Locale};

/// Resolved presentation settings for one invocation
#[derive(Debug, Clone, Copy)]
pub struct Presentation {
    pub format: OutputFormat,
    pub locale: Locale,
    pub quiet: bool,
    pub verbose: bool,
}

impl Presentation {
    /// Merge command-line flags over the layered config
    pub fn resolve(global: &GlobalOpts, config: &Config) -> Self {
        if !config.color() {
            console::set_colors_enabled(false);
        }
        Self {
            format: global.format,
            locale: config.lang(global.lang),
            quiet: global.quiet,
            verbose: global.verbose,
        }
    }

    /// Diagnostic line on stderr, shown only with --verbose
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", style("debug:").dim(), style(message.as_ref()).dim());
        }
    }
}

/// Render lines as plain text, headings and blanks dropped when quiet
pub fn render_text(lines: &[Line], quiet: bool) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            Line::Heading(text) if !quiet => {
                out.push_str(&style(text).bold().to_string());
                out.push('\n');
            }
            Line::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Line::Blank if !quiet => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Print a transcript in the requested format
pub fn print_transcript(transcript: &Transcript, p: &Presentation) {
    match p.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&transcript.to_json()).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            let lines = report::lines(transcript, p.locale);
            print!("{}", render_text(&lines, p.quiet));
        }
    }
}

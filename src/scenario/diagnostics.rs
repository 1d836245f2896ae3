//! Scenario error diagnostics with source-located messages

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::vehicle::VehicleKind;

/// YAML syntax or shape error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("Invalid scenario file")]
#[diagnostic(code(fleet::scenario::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("{message}")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying error message
    message: String,
}

impl YamlSyntaxError {
    /// Create a syntax error from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can go wrong loading or running a scenario
#[derive(Debug, Error, Diagnostic)]
pub enum ScenarioError {
    #[error("Failed to read scenario '{path}'")]
    #[diagnostic(code(fleet::scenario::io))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("Vehicle id '{id}' is declared more than once")]
    #[diagnostic(
        code(fleet::scenario::duplicate_vehicle),
        help("Give every vehicle under `vehicles:` a unique id")
    )]
    DuplicateVehicle { id: String },

    #[error("Truck '{id}' declares an invalid max_load of {max_load}")]
    #[diagnostic(
        code(fleet::scenario::invalid_max_load),
        help("`max_load` is a finite number of kg, zero or greater")
    )]
    InvalidMaxLoad { id: String, max_load: f64 },

    #[error("Step {step} refers to unknown vehicle '{id}'")]
    #[diagnostic(
        code(fleet::scenario::unknown_vehicle),
        help("Declared vehicles: {known}")
    )]
    UnknownVehicle {
        step: usize,
        id: String,
        known: String,
    },

    #[error("Step {step}: a {kind} cannot '{action}' (vehicle '{id}')")]
    #[diagnostic(
        code(fleet::scenario::unsupported_action),
        help("Only buses board/drop passengers; only trucks and bicycles load/unload cargo")
    )]
    UnsupportedAction {
        step: usize,
        id: String,
        kind: VehicleKind,
        action: &'static str,
    },
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    let mut current_line = 1;

    for (i, ch) in source.char_indices() {
        if current_line == line {
            let line_start = i;
            for (col, (j, c)) in source[line_start..].char_indices().enumerate() {
                if col + 1 == column {
                    return line_start + j;
                }
                if c == '\n' {
                    break;
                }
            }
            return line_start;
        }
        if ch == '\n' {
            current_line += 1;
        }
        offset = i;
    }

    offset
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("unknown variant") && msg_lower.contains("bus") {
        return Some("Vehicle `type` must be one of: bus, truck, bicycle".to_string());
    }

    if msg_lower.contains("unknown variant") {
        return Some(
            "Step `action` must be one of: info, move, status, board, drop, load, unload"
                .to_string(),
        );
    }

    if msg_lower.contains("missing field") {
        return Some(
            "bus needs `capacity`, truck needs `max_load`, board/drop need `count`, load needs `weight`"
                .to_string(),
        );
    }

    if msg_lower.contains("does not apply to action") {
        return Some(
            "board/drop take `count`, load takes `weight`, other actions take neither"
                .to_string(),
        );
    }

    if msg_lower.contains("unknown field") {
        return Some(
            "Check the key for typos; each vehicle type and step accepts a fixed set of keys"
                .to_string(),
        );
    }

    if msg_lower.contains("invalid value") || msg_lower.contains("invalid type") {
        return Some(
            "Passenger counts are whole numbers >= 0; weights are numbers in kg"
                .to_string(),
        );
    }

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate key") {
        return Some(
            "Each key can only appear once. Remove or rename the duplicate key."
                .to_string(),
        );
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some(
            "You may be missing a space after ':' or have incorrect indentation."
                .to_string(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 2, 3), 8);
        assert_eq!(line_col_to_offset(source, 3, 1), 12);
    }

    #[test]
    fn test_help_generation() {
        assert!(generate_help("unknown variant `tram`, expected one of `bus`, `truck`, `bicycle`")
            .unwrap()
            .contains("bus, truck, bicycle"));
        assert!(generate_help("unknown variant `fly`, expected one of `info`, `move`")
            .unwrap()
            .contains("action"));
        assert!(generate_help("missing field `max_load`").is_some());
        assert!(generate_help("found tab character").is_some());
        assert!(generate_help("field `weight` does not apply to action `board`")
            .unwrap()
            .contains("`count`"));
        assert!(generate_help("unknown field `capacty`, expected one of `id`, `brand`")
            .unwrap()
            .contains("typos"));
        assert!(generate_help("some random error").is_none());
    }
}

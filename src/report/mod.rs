//! Rendering transcripts as human-readable lines

mod en;
mod uk;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::event::{Entry, Event, Reading, Section, Transcript};

/// Message language
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Ukrainian
    Uk,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Uk => write!(f, "uk"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "uk" | "ua" | "ukrainian" => Ok(Locale::Uk),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// One rendered transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading(String),
    Text(String),
    Blank,
}

pub fn section(section: &Section, locale: Locale) -> String {
    match locale {
        Locale::En => en::section(section),
        Locale::Uk => uk::section(section),
    }
}

pub fn event(event: &Event, locale: Locale) -> String {
    match locale {
        Locale::En => en::event(event),
        Locale::Uk => uk::event(event),
    }
}

pub fn reading(reading: &Reading, locale: Locale) -> String {
    match locale {
        Locale::En => en::reading(reading),
        Locale::Uk => uk::reading(reading),
    }
}

pub fn entry(entry: &Entry, locale: Locale) -> Line {
    match entry {
        Entry::Heading { section: s } => Line::Heading(section(s, locale)),
        Entry::Event(e) => Line::Text(event(e, locale)),
        Entry::Reading(r) => Line::Text(reading(r, locale)),
        Entry::Blank => Line::Blank,
    }
}

/// Render a whole transcript in order
pub fn lines(transcript: &Transcript, locale: Locale) -> Vec<Line> {
    transcript
        .entries()
        .iter()
        .map(|e| entry(e, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::VehicleKind;

    #[test]
    fn test_locale_parse() {
        assert_eq!("UK".parse::<Locale>().unwrap(), Locale::Uk);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_english_messages() {
        let e = Event::Boarded { count: 30, total: 30 };
        assert_eq!(event(&e, Locale::En), "30 passengers boarded the bus. Total: 30");

        let e = Event::Loaded {
            kind: VehicleKind::Truck,
            weight: 5000.0,
            current: 5000.0,
        };
        assert_eq!(event(&e, Locale::En), "Loaded 5000.0 kg. Current load: 5000.0 kg");

        let e = Event::Overloaded {
            kind: VehicleKind::Bicycle,
            max: 10.0,
        };
        assert_eq!(event(&e, Locale::En), "Basket is full! Maximum: 10.0 kg");
    }

    #[test]
    fn test_ukrainian_messages() {
        let e = Event::BoardingRefused { capacity: 50 };
        assert_eq!(event(&e, Locale::Uk), "Недостатньо місць! Максимум: 50");

        let e = Event::Unloaded {
            kind: VehicleKind::Bicycle,
            amount: 7.0,
        };
        assert_eq!(event(&e, Locale::Uk), "Розвантажено 7.0 кг з кошика");

        assert_eq!(
            section(&Section::Title, Locale::Uk),
            "=== ТРАНСПОРТНА КОМПАНІЯ ==="
        );
    }

    #[test]
    fn test_entry_lines() {
        let mut t = Transcript::new();
        t.heading(Section::Custom("Morning run".to_string()));
        t.blank();
        t.reading(Reading::CurrentLoad { kg: 12.5 });
        let rendered = lines(&t, Locale::En);
        assert_eq!(
            rendered,
            vec![
                Line::Heading("--- Morning run ---".to_string()),
                Line::Blank,
                Line::Text("Current load: 12.5 kg".to_string()),
            ]
        );
    }
}

//! CLI command implementations

pub mod completions;
pub mod config;
pub mod demo;
pub mod run;

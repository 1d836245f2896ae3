//! Transport Fleet
//!
//! A small transport company model: buses carry passengers, trucks and
//! bicycles carry cargo. Every operation returns an event describing what
//! happened instead of printing, so runs can be rendered in any language or
//! serialized.

pub mod cli;
pub mod core;
pub mod demo;
pub mod entities;
pub mod report;
pub mod scenario;

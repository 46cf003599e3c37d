//! Core types shared across showparse facilities
//!
//! This crate provides foundational types used by the parsing pipeline,
//! the diff engine, and the logging facility:
//!
//! - **Record kinds**: the closed set of supported command-output shapes
//! - **Raw lines**: input lines tagged with their 1-based source ordinal
//! - **Schema constants**: canonical per-kind column schemas and the
//!   field keys used for structured logging

pub mod kind;
pub mod line;
pub mod schema;

pub use kind::RecordKind;
pub use line::RawLine;

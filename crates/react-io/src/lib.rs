//! react-io - Data I/O for the ReACT extractor
//!
//! This crate provides the readers and writers the extraction pipeline
//! sits between:
//!
//! - **CSV**: monthly metrics tables with per-column type inference
//! - **JSON**: the reference ReACT set (an array of objects) and the
//!   pretty-printed extraction output
//!
//! # Design
//!
//! Tabular readers implement the `DataReader` trait for uniform access.
//! Files are read once and held in memory; the inputs are small.

pub mod csv_reader;
pub mod json;
pub mod reader;
pub mod schema;

pub use csv_reader::CsvReader;
pub use json::*;
pub use reader::*;
pub use schema::*;

//! I/O module
//!
//! Handles session scripts and the account summary.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, summary serialization)
//! - `script_reader` - Script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{convert_script_record, write_accounts_csv, ScriptRecord};
pub use script_reader::ScriptReader;

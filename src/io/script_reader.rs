//! Session script reader with iterator interface
//!
//! Provides a streaming iterator over commands from a CSV script file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! ScriptReader implements the Iterator trait, yielding
//! `Result<Command, BankError>` for each CSV row:
//!
//! ```no_run
//! use bank_cli::io::script_reader::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("session.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Running: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing script is reported from `new()`
//! - Individual row errors are yielded as `BankError::Parse` with the line
//!   the row starts on, as counted by the CSV parser (blank lines and quoted
//!   line breaks included)

use crate::io::csv_format::{convert_script_record, ScriptRecord};
use crate::types::{BankError, Command};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV script reader
#[derive(Debug)]
pub struct ScriptReader<R: Read = File> {
    reader: csv::Reader<R>,
    headers: Option<StringRecord>,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// - `ScriptNotFound` if the file does not exist
    /// - `Io` for any other open failure
    pub fn new(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BankError::ScriptNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::Io {
                message: format!("Failed to open script '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a script from any byte source
    ///
    /// The CSV reader trims whitespace from all fields and accepts rows with
    /// fewer columns than the header.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            headers: None,
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Command, BankError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.headers.is_none() {
            match self.reader.headers() {
                Ok(headers) => self.headers = Some(headers.clone()),
                Err(e) => return Some(Err(e.into())),
            }
        }

        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e.into())),
        }
        let line = record.position().map(|pos| pos.line());

        Some(
            record
                .deserialize(self.headers.as_ref())
                .map_err(|e| BankError::parse(line, e.to_string()))
                .and_then(|script_record: ScriptRecord| {
                    convert_script_record(script_record).map_err(|e| BankError::parse(line, e))
                }),
        )
    }
}

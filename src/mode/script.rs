//! Script session mode
//!
//! Replays a CSV script through the bank, delegating:
//! - CSV parsing to `ScriptReader` (iterator interface)
//! - Command processing to `Bank`
//! - Output to `Renderer`
//!
//! Malformed rows are logged and skipped; an `exit` row stops the replay.

use crate::core::Bank;
use crate::io::ScriptReader;
use crate::mode::SessionMode;
use crate::shell::Renderer;
use crate::types::{BankError, Command};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Script-driven session
#[derive(Debug, Clone)]
pub struct ScriptMode {
    path: PathBuf,
    renderer: Renderer,
}

impl ScriptMode {
    pub fn new(path: &Path, renderer: Renderer) -> Self {
        ScriptMode {
            path: path.to_path_buf(),
            renderer,
        }
    }
}

impl SessionMode for ScriptMode {
    fn run(&mut self, bank: &mut Bank, output: &mut dyn Write) -> Result<(), BankError> {
        let reader = ScriptReader::new(&self.path)?;
        info!(path = %self.path.display(), "replaying script");

        for result in reader {
            match result {
                Ok(command) => {
                    let notices = bank.process(&command);
                    self.renderer.write_notices(&notices, output)?;
                    if command == Command::Exit {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "skipping script row");
                }
            }
        }

        Ok(())
    }
}

//! Shared event journal
//!
//! Every narration and leaf-event line goes to the console and to the run's
//! log file, in the same order. The driver owns the journal and lends it to
//! the traversals; the tree itself never holds a writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::error::{ForestError, Result};

/// Name of the log artifact, created fresh in the working directory each run.
pub const LOG_FILE_NAME: &str = "leaf_fall_log.txt";

pub struct EventJournal {
    console: Box<dyn Write>,
    log: Box<dyn Write>,
}

impl std::fmt::Debug for EventJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventJournal").finish_non_exhaustive()
    }
}

impl EventJournal {
    /// Open the production journal: stdout plus a truncated log file at
    /// `path`. A previous run's log is overwritten, not appended to.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ForestError::LogCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(
            Box::new(io::stdout()),
            Box::new(BufWriter::new(file)),
        ))
    }

    /// Build a journal over arbitrary writers. Tests pass in-memory buffers
    /// to capture and compare both streams.
    pub fn new(console: Box<dyn Write>, log: Box<dyn Write>) -> Self {
        Self { console, log }
    }

    /// Write one line, newline-terminated, to both streams, console first.
    pub fn record(&mut self, line: &str) -> Result<()> {
        writeln!(self.console, "{line}")?;
        writeln!(self.log, "{line}")?;
        Ok(())
    }

    /// Flush both streams on the success path.
    ///
    /// Dropping the journal also flushes the buffered log writer, but only
    /// `finish` surfaces a flush failure to the caller.
    pub fn finish(mut self) -> Result<()> {
        self.console.flush()?;
        self.log.flush()?;
        Ok(())
    }
}

//! User-facing progress messages.
//!
//! Commands describe what they do through [`Reporter`] events; the binary
//! renders them on the terminal, tests record them.

pub mod terminal;

use std::path::PathBuf;

pub use terminal::TerminalReporter;

/// Something a command wants the user to know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An expected tracked file does not exist.
    Missing(PathBuf),
    /// A tracked file is about to be copied into `to`.
    Copying { file: String, to: PathBuf },
    /// Non-fatal problem; the command carries on.
    Warning(String),
    /// A printer profile and the tracked files it lacks.
    Profile { name: String, missing: Vec<String> },
    /// The command finished its work.
    Done(String),
}

/// Sink for command events.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths reported as missing, in report order.
    pub fn missing(&self) -> Vec<&PathBuf> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Missing(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// File names reported as copied, in report order.
    pub fn copied(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Copying { file, .. } => Some(file.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Event) {
        self.events.push(event);
    }
}

//! Terminal reporter: one styled line per event.

use colored::Colorize;

use crate::output::{Event, Reporter};

/// Prints events as they happen. Warnings go to stderr, the rest to stdout.
pub struct TerminalReporter;

impl TerminalReporter {
    /// Format a single event without a trailing newline.
    pub fn render(event: &Event) -> String {
        match event {
            Event::Missing(path) => {
                format!("  {} Missing file: {}", "✖".red().bold(), path.display())
            }
            Event::Copying { file, to } => format!(
                "  {} copying {} {} {}",
                "→".cyan(),
                file.bold(),
                "to".dimmed(),
                to.display()
            ),
            Event::Warning(msg) => format!("  {} {}", "⚠".yellow().bold(), msg.yellow()),
            Event::Profile { name, missing } => {
                if missing.is_empty() {
                    format!("  {} {}", "✔".green().bold(), name.bold())
                } else {
                    format!(
                        "  {} {}  {} {}",
                        "⚠".yellow().bold(),
                        name.bold(),
                        "missing:".dimmed(),
                        missing.join(", ")
                    )
                }
            }
            Event::Done(msg) => format!("  {} {}", "✔".green().bold(), msg),
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&mut self, event: Event) {
        let line = Self::render(&event);
        match event {
            Event::Warning(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

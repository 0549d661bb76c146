// src/app.rs
use std::io::Write;
use anyhow::Result;
use tracing::debug;

use crate::console;
use crate::scan::{self, ScanRequest};

/// Main application struct that executes commands
pub struct App;

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run a specific command, writing user-facing output to `out`
    pub fn run_command<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Scan(scan_cmd) => self.handle_scan_command(scan_cmd, out),
        }
    }

    /// Handle scan-related commands
    fn handle_scan_command<W: Write>(&self, command: &ScanCommand, out: &mut W) -> Result<()> {
        match command {
            ScanCommand::Run { target } => {
                debug!("Preparing stub scan for '{}'", target);

                console::write_line(out, &format!("Scanning target {} (stub)", target))?;

                let request = ScanRequest::new(target.clone());
                let summary = scan::run(&request);

                writeln!(out, "{}", summary.to_json_line()?)?;

                Ok(())
            }
        }
    }
}

/// Command enum representing all possible CLI commands
#[derive(Debug, Clone)]
pub enum Command {
    Scan(ScanCommand),
}

/// Scan execution commands
#[derive(Debug, Clone)]
pub enum ScanCommand {
    Run { target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_command_output_lines() {
        let app = App::new();
        let command = Command::Scan(ScanCommand::Run {
            target: "bar".to_string(),
        });

        let mut buf = Vec::new();
        app.run_command(&command, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[osint-utils] Scanning target bar (stub)",
                r#"{"target":"bar","status":"stub"}"#,
            ]
        );
    }
}

//! Output formatter for human-readable and JSON output
//!
//! Ensures consistent output formatting across all commands.

use std::sync::{Arc, Mutex};

use console::style;
use serde::Serialize;

use super::OutputConfig;

/// Lines written by a capturing formatter
#[derive(Debug, Default)]
struct Captured {
    stdout: Vec<String>,
    stderr: Vec<String>,
}

#[derive(Debug, Clone)]
enum Sink {
    Terminal,
    Capture(Arc<Mutex<Captured>>),
}

/// Read access to the output of a capturing formatter
#[derive(Debug, Clone)]
pub struct CaptureHandle(Arc<Mutex<Captured>>);

impl CaptureHandle {
    /// Everything written to stdout, one line per entry
    pub fn stdout(&self) -> String {
        let captured = self.0.lock().unwrap_or_else(|e| e.into_inner());
        captured.stdout.join("\n")
    }

    /// Everything written to stderr, one line per entry
    pub fn stderr(&self) -> String {
        let captured = self.0.lock().unwrap_or_else(|e| e.into_inner());
        captured.stderr.join("\n")
    }
}

/// Formatter for CLI output
///
/// Handles both human-readable and JSON output formats based on configuration.
/// When JSON mode is enabled, all output is strict JSON without colors or progress.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
    sink: Sink,
}

impl Formatter {
    /// Create a new formatter writing to the terminal
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            sink: Sink::Terminal,
        }
    }

    /// Create a formatter that records output instead of printing it
    pub fn capture(config: OutputConfig) -> (Self, CaptureHandle) {
        let buffer = Arc::new(Mutex::new(Captured::default()));
        let formatter = Self {
            config,
            sink: Sink::Capture(Arc::clone(&buffer)),
        };
        (formatter, CaptureHandle(buffer))
    }

    /// Output configuration in use
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Check if JSON output mode is enabled
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color
            && !self.config.json
            && matches!(self.sink, Sink::Terminal)
            && console::colors_enabled()
    }

    fn write_out(&self, line: String) {
        match &self.sink {
            Sink::Terminal => println!("{line}"),
            Sink::Capture(buffer) => buffer
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .stdout
                .push(line),
        }
    }

    fn write_err(&self, line: String) {
        match &self.sink {
            Sink::Terminal => eprintln!("{line}"),
            Sink::Capture(buffer) => buffer
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .stderr
                .push(line),
        }
    }

    /// Output a success message
    pub fn success(&self, message: &str) {
        if self.config.quiet || self.config.json {
            return;
        }

        if self.colors_enabled() {
            self.write_out(style(message).green().force_styling(true).to_string());
        } else {
            self.write_out(message.to_string());
        }
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        if self.config.json {
            let error = serde_json::json!({
                "error": message
            });
            self.write_err(
                serde_json::to_string_pretty(&error).unwrap_or_else(|_| message.to_string()),
            );
        } else if self.colors_enabled() {
            self.write_err(style(message).red().force_styling(true).to_string());
        } else {
            self.write_err(message.to_string());
        }
    }

    /// Output a warning message
    pub fn warning(&self, message: &str) {
        if self.config.quiet || self.config.json {
            return;
        }

        if self.colors_enabled() {
            self.write_err(style(message).yellow().force_styling(true).to_string());
        } else {
            self.write_err(message.to_string());
        }
    }

    /// Output JSON directly
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.write_out(json),
            Err(e) => self.write_err(format!("Error serializing output: {e}")),
        }
    }

    /// Print a line of text (respects quiet mode)
    pub fn println(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        self.write_out(message.to_string());
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

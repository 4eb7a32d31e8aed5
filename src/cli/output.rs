//! Global output mode and print helpers.
//!
//! The binary mirrors its global flags into `SITESCOUT_*` environment
//! variables at startup so any module can check the active output mode
//! without threading flags through every call.

use serde::Serialize;

/// True when `--json` was passed: stdout carries machine-readable output only.
pub fn is_json() -> bool {
    std::env::var("SITESCOUT_JSON").is_ok()
}

/// True when `--quiet` was passed: suppress non-essential output.
pub fn is_quiet() -> bool {
    std::env::var("SITESCOUT_QUIET").is_ok()
}

/// True when `--verbose` was passed: enable debug-level logging.
pub fn is_verbose() -> bool {
    std::env::var("SITESCOUT_VERBOSE").is_ok()
}

/// True when colored output should be suppressed.
pub fn no_color() -> bool {
    std::env::var("SITESCOUT_NO_COLOR").is_ok() || std::env::var("NO_COLOR").is_ok()
}

/// Serialize a value to pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("  Error: failed to serialize output: {e}"),
    }
}

/// Status symbols, colored unless color is disabled.
pub struct Styled {
    color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self { color: !no_color() }
    }

    pub fn ok_sym(&self) -> &'static str {
        if self.color {
            "\x1b[32m✓\x1b[0m"
        } else {
            "✓"
        }
    }

    pub fn warn_sym(&self) -> &'static str {
        if self.color {
            "\x1b[33m!\x1b[0m"
        } else {
            "!"
        }
    }
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

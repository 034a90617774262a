//! Logging utilities with colored status prefixes.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with a colored `[prefix]`
//! - `debug!` macro gated on the `--verbose` flag
//!
//! # Example
//!
//! ```ignore
//! log!("OK"; "{} atualizado (ID {})", slug, id);
//! log!("ERRO"; "Falha ao ler: {}", path.display());
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
#[allow(dead_code)] // Used by debug! macro
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored status prefix
///
/// # Usage
/// ```ignore
/// log!("AVISO"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($prefix:expr; $($arg:tt)*) => {{
        $crate::logger::log($prefix, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("migra"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($prefix:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($prefix, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored status prefix
#[inline]
pub fn log(prefix: &str, message: &str) {
    let prefix = colorize_prefix(prefix);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a status prefix based on its meaning
#[inline]
fn colorize_prefix(prefix: &str) -> String {
    let lower = prefix.to_ascii_lowercase();
    let prefix = format!("[{prefix}]");
    match lower.as_str() {
        "ok" => prefix.bright_green().bold().to_string(),
        "erro" => prefix.bright_red().bold().to_string(),
        "aviso" => prefix.bright_yellow().bold().to_string(),
        _ => prefix.bright_blue().bold().to_string(),
    }
}

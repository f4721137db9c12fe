//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and build metadata so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "accrue";

/// Local config filename (`.accrue.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".accrue.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "accrue";

/// Crate version, from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exposed by `build.rs`.
pub const TARGET: &str = env!("TARGET");


// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "ACCRUE_FORMAT";
pub const ENV_DECIMAL_PLACES: &str = "ACCRUE_DECIMAL_PLACES";
pub const ENV_SIMPLE_ARITHMETIC: &str = "ACCRUE_SIMPLE_ARITHMETIC";

//! Settings schema definitions for Redline configuration.
//!
//! All settings structs use `#[serde(default)]` to allow partial
//! configuration files. Missing fields are filled with the defaults the
//! engine was tuned with.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Logging level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        write!(f, "{}", s)
    }
}

/// Tuning knobs for character-level diff pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "generated/")]
pub struct DiffSettings {
    /// How many lines around a candidate's own index to scan for a pair.
    pub pairing_window: usize,
    /// Both lines must exceed this many characters to pair.
    pub min_pair_line_len: usize,
    /// Length of the shared leading/trailing affix that accepts a pair.
    pub affix_len: usize,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            pairing_window: 3,
            min_pair_line_len: 10,
            affix_len: 5,
        }
    }
}

/// Session workflow settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "generated/")]
pub struct SessionSettings {
    /// Minimum accepted character length for a collaborator response.
    /// Shorter responses fail the cycle instead of producing a bogus diff.
    pub plausibility_threshold: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            plausibility_threshold: 10,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(default)]
#[ts(export, export_to = "generated/")]
pub struct LoggingSettings {
    pub level: LogLevel,
}

/// Root settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[serde(default)]
#[ts(export, export_to = "generated/")]
pub struct RedlineSettings {
    pub diff: DiffSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

//! Centralized TOML-based settings system for Redline.
//!
//! This crate provides configuration management for the Redline engine:
//! - Loading settings from `~/.redline/settings.toml`
//! - Atomic file writes with temp file + rename
//! - First-run template generation
//! - Type-safe settings schema with serde defaults
//!
//! The diff-annotation tuning knobs (pairing window, affix length, minimum
//! paired line length) and the response plausibility threshold live here:
//! they are empirically chosen configuration, not invariants, and changing
//! them affects annotation quality rather than correctness.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: external crates only (serde, toml, tokio, dirs)
//! - Used by: redline-session
//!
//! # Usage
//!
//! ```rust,ignore
//! use redline_settings::SettingsManager;
//!
//! let manager = SettingsManager::new().await?;
//! let settings = manager.get().await;
//! let window = settings.diff.pairing_window;
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::{settings_path, SettingsManager};
pub use schema::{DiffSettings, LogLevel, LoggingSettings, RedlineSettings, SessionSettings};

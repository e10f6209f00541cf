//! Configuration system for the cursor-trail animation core.
//!
//! This crate provides configuration loading, saving, and default values
//! for the trail animation. It includes:
//!
//! - Trail timing and decay settings
//! - Cursor glyph thickness settings used for edge projection
//! - Cross-window choreography toggle
//! - YAML persistence with per-field defaults

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;

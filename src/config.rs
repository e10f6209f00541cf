//! Trail configuration management.
//!
//! Re-exports all configuration types from the `cursor-trail-config` crate.
//! All configuration types, defaults, and utilities are defined there.

pub use cursor_trail_config::*;

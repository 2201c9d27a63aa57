//! Shared utilities: configuration, errors, and the debug switch.

pub mod config;
pub mod debug;
pub mod error;

// Available exports via submodules:
// config::{Config, MotionConfig}
// debug::is_debug_enabled
// error::{FolioError, FolioResult, ResultExt}

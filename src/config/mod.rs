//! Configuration module for scrollspy.
//!
//! This module is split into several sub-modules:
//! - `types`: Core types and enums
//! - `config_struct`: Config struct definition and defaults
//! - `io`: Config loading, saving, and repair

mod config_struct;
mod io;
mod types;

// Re-export public types for external use
pub use config_struct::Config;
pub use io::{get_config_path, load_config, save_config};
pub use types::ThemeMode;

//! Configuration loading and management for the guard salary engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file. Only operational settings (such as how many calculations the
//! history keeps) are configurable.
//!
//! # Example
//!
//! ```no_run
//! use guard_salary::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("History capacity: {}", loader.history_capacity());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_HISTORY_CAPACITY, EngineConfig, HistoryConfig};

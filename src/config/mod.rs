//! Configuration module for adsweep
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every knob has a default, so a missing or partial file still yields a usable
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use adsweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, FetchConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

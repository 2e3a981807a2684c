//! Run configuration
//!
//! The key/value configuration a caller attaches to a tracked run
//! (hyperparameters, dataset names, flags). Values are arbitrary JSON and
//! keep their insertion order.
//!
//! # Example
//!
//! ```
//! use runtrack_runconfig::RunConfig;
//! use serde_json::json;
//!
//! let mut config = RunConfig::from_json(r#"{"lr": 0.01, "epochs": 10}"#).unwrap();
//! config.insert("optimizer", json!("adam"));
//!
//! assert_eq!(config.get("epochs"), Some(&json!(10)));
//! assert_eq!(config.len(), 3);
//! ```

#![warn(unreachable_pub)]

mod config;
mod error;

pub use config::{toml_to_json, RunConfig};
pub use error::{json_kind, ConfigError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

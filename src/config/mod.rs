//! Configuration loading and management for the wage calculation engine.
//!
//! This module provides functionality to load the calculation policy and
//! effective-dated deduction rates from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Pro-ration base: {} days", config.policy().days_in_period_base);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculationPolicy, DeductionRates, EngineConfig};

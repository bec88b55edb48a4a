//! Match runner for ML-checkers
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Random, seeded openings so deterministic engines still vary
//! - JSON match reports and a text summary
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the classical and random engine
//! cargo run -p tournament -- match classical random --games 20 --depth 4
//!
//! # Load settings from TOML and keep the report
//! cargo run -p tournament -- match classical classical --config match.toml --out report.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;

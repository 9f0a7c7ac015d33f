//! Chef node configuration for the travis go worker.
//!
//! A flat JSON object of worker settings becomes the worker's environment:
//! every key is upper-cased and prefixed with `TRAVIS_`, and the resulting map
//! is embedded in a fixed chef skeleton (`run_list` plus
//! `travis.worker.environment`).

pub mod config;
pub mod error;
pub mod generate;
pub mod keys;
pub mod skeleton;

pub use config::GenerateOptions;
pub use error::GenerateError;
pub use generate::{generate, generate_from_str, to_pretty_json};
pub use keys::{derive_key, environment_from};
pub use skeleton::{ChefConfig, Environment, TravisAttributes, WorkerAttributes};

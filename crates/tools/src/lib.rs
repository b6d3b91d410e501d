//! Chainsmith Tools Library
//!
//! Provides configuration management and utilities for the chainsmith smart
//! contract toolchain.

pub mod config;
pub mod env;
pub mod secret;

pub use config::{Config, ConfigError, NetworkConfig, VerificationConfig};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use secret::{InvalidPrivateKey, PrivateKey};

//! Ferrous Proxy Domain Layer
pub mod client_locality;
pub mod config;
pub mod errors;

pub use client_locality::ClientLocality;
pub use config::{
    CliOverrides, Config, ConfigError, InterceptionConfig, InterceptionRule, LogFormat,
    LoggingConfig, RuleAction,
};
pub use errors::DomainError;

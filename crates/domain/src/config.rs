mod errors;
mod interception;
mod logging;
mod root;

pub use errors::ConfigError;
pub use interception::{InterceptionConfig, InterceptionRule, RuleAction};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};

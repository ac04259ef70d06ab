//! Ferrous Proxy Application Layer
pub mod context;
pub mod interception;
pub mod ports;
pub mod use_cases;

pub use context::RequestContext;
pub use interception::{Decision, NoopInterceptor, TerminalResponse};

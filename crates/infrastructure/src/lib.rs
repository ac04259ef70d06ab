//! Ferrous Proxy Infrastructure Layer
pub mod dns;
pub mod interception;

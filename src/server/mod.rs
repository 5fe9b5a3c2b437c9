//! Server configuration, runtime, and HTTP transport.

pub mod config;
pub mod http;
pub mod runtime;

//! CLI, configuration, and HTTP/1 transport binding around
//! [`ldp_core::controller::handle`].

pub mod config;
pub mod problem;
pub mod service;
pub mod tracing;

pub use config::Config;

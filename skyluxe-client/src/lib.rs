//! Skyluxe flight search client.

pub mod cli;
pub mod config;
pub mod display;
pub mod http;
pub mod pricing;
pub mod session;

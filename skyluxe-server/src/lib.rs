//! Skyluxe flight search gateway.

pub mod app;
pub mod cli;
pub mod config;
pub mod duffel;
pub mod routes;

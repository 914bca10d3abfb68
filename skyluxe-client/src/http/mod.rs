//! Gateway HTTP client.

pub mod client;
pub mod request;

pub use client::{Client, StatusError};

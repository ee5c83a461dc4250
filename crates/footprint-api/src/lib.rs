//! HTTP transport for the footprint estimator

pub mod api;
pub mod config;
pub mod error;

//! Interactive five-sector circular flow of income simulator.
//!
//! The [`engine`] module holds the pure computation; [`diagram`] and
//! [`report`] are presentation layers over its output; [`api`] exposes
//! everything over HTTP for slider-driven clients.

pub mod api;
pub mod config;
pub mod diagram;
pub mod domain;
pub mod engine;
pub mod report;
pub mod telemetry;

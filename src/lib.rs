//! Menuz host bootstrap
//!
//! Configuration loading, tracing setup and dependency wiring for the
//! preference stores in `mz-app`.

pub mod bootstrap;

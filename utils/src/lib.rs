//! Shared utilities for the Yottaflux burn-address tooling.

pub mod logging;

pub use logging::{init_logging, LogFormat};

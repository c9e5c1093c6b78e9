//! FCx front-end driver.
//!
//! The `fcx` binary is a thin argument dispatcher; the work lives in
//! [`commands`].

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

//! # Printer Module
//!
//! The engine and its configuration.
//!
//! ## Modules
//!
//! - [`config`]: Printer type and construction options
//! - [`engine`]: The [`ThermalPrinter`] command buffer engine

pub mod config;
pub mod engine;

pub use config::{PrinterOptions, PrinterType};
pub use engine::ThermalPrinter;

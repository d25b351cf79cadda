//! # Printer Module
//!
//! - [`config`]: Printer hardware specifications
//! - [`encoder`]: [`Printer`], the operation surface bound to a transport

pub mod config;
pub mod encoder;

pub use config::PrinterConfig;
pub use encoder::Printer;

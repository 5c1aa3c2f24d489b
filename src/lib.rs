//! Library crate for bus-roster.
//!
//! This crate exposes the building blocks of the TUI:
//! - Bus records and their wire format (`model`)
//! - HTTP client for `/api/buses` (`api`)
//! - Error taxonomy (`error`)
//! - In-memory search helpers (`search`)
//! - Application state, reducer and event loop (`app`)
//! - UI rendering and widgets (`ui`)
//! - Command-line flags and logging setup (`cli`, `logging`)
//!
//! It is used by the `bus-roster` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
pub use error::{ApiError, Operation};
pub use model::{Bus, BusDraft, BusId, BusType};

//! Sheetcache - A read-through caching proxy for public sheet and
//! document exports
//!
//! Turns public, spreadsheet-shaped documents (CSV-exported sheets and
//! HTML-exported docs) into normalized, cached records behind a small
//! REST surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;

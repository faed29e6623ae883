//! FIRMS customs facility code lookup.
//!
//! Loads the FIRMS code list from CSV and filters it either by one free-text
//! term across all columns or by per-column substrings. [`server`] exposes
//! the search over HTTP.

pub mod data;
pub mod error;
pub mod request;
pub mod server;
pub mod state;

pub use data::filter::Query;
pub use data::model::{Column, FirmDataset, FirmRecord};
pub use error::{LookupError, Result};
pub use state::AppState;

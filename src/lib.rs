//! fluview - full-screen web view shell for the influenza prediction dashboard.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod safe_area;
pub mod trace;
pub mod viewer;

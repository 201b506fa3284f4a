//! `presswire` library crate.
//!
//! The binary (`press`) is a thin wrapper around this library so that:
//!
//! - core logic (classification, population, pagination) is testable without
//!   spawning processes or hitting the network
//! - the model layer is reusable by other front-ends (bots, exporters, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod report;

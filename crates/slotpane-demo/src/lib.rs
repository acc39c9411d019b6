#![forbid(unsafe_code)]

//! Command-line front end for SlotPane documents.

pub mod cli;
pub mod error;
pub mod grid;

pub use cli::{run, run_from_env};

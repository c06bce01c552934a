//! CLI module for the `promptmirror` binary
//!
//! Command handlers and output formatting. Argument parsing lives in
//! `main.rs`; handlers here take already-parsed values so they stay testable.

pub mod handlers;
pub mod output;

pub use handlers::*;
pub use output::*;

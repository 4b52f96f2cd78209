//! # Dropstab CLI
//!
//! Small command-line front end for the Dropstab SDK. Every invocation logs
//! in with the given credentials, runs one command and prints the API
//! response as JSON.

pub mod cli;
pub mod error;
pub mod logging;

pub use cli::*;
pub use error::*;

//! Sum of the integers `1..=n`, computed three ways.
//!
//! - **[`core`]**: The iterative, closed-form and recursive implementations
//!   plus the validated [`core::method::evaluate`] entry point. No I/O.
//! - **[`io`]**: Config file loading and writing.
//!
//! [`commands`] and [`verify`] build the CLI commands on top of both.

pub mod commands;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod verify;

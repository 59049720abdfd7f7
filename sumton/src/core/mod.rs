//! Deterministic, pure summation logic.
//!
//! Core modules must be free of I/O side effects. Each strategy lives in its
//! own module so its complexity can be read off in isolation; [`method`] ties
//! them together behind a validated entry point.

pub mod closed_form;
pub mod iterative;
pub mod method;
pub mod recursive;

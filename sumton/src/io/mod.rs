//! I/O helpers for sumton commands.

pub mod config;

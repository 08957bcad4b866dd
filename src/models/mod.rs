//! Settings models loaded at startup.

pub mod config;

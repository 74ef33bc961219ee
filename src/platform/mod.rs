// LogTally - platform/mod.rs
//
// Platform abstraction layer: config file location, input file access.
// Must NOT depend on: app.

pub mod config;
pub mod fs;

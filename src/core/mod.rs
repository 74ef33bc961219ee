// LogTally - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform or app. Never opens files itself.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod summary;

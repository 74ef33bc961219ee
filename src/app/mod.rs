// LogTally - app/mod.rs
//
// Application layer: wires platform input into the core pipeline.

pub mod pipeline;

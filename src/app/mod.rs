// x2common - app/mod.rs
//
// Application layer: wires core loggers to the platform environment and
// output, and owns the process-wide registry.

pub mod global;
pub mod registry;

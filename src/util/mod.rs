// x2common - util/mod.rs
//
// Utility modules: error kinds, named constants, diagnostics setup.
// No dependencies on core, app, or platform layers.

pub mod constants;
pub mod error;
pub mod logging;

// x2common - platform/mod.rs
//
// Platform layer: the real process environment and stderr.
// Dependencies: standard library, core traits.
// Must NOT depend on: app.

pub mod env;
pub mod output;

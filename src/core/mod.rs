// x2common - core/mod.rs
//
// Core logging logic: option parsing, section matching, message building
// and logger handles.
// Environment and output are reached only through the EnvSource and
// LogSink traits; must NOT depend on platform or app.

pub mod env;
pub mod logger;
pub mod message;
pub mod options;
pub mod section;
pub mod sink;

//! Application ports (traits) for external dependencies.
//!
//! Driven (output) ports are called by the application and implemented in
//! `uvmgen-adapters`. The only one is `Filesystem`.

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;

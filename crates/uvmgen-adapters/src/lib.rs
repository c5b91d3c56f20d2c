//! Infrastructure adapters for uvmgen.
//!
//! Implements the ports defined in `uvmgen_core::application::ports`. All
//! real I/O in the workspace lives here.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};

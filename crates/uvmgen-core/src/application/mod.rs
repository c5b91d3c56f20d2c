//! Application layer for uvmgen.
//!
//! - **Services**: the generation use case (`GenerateService`) and the
//!   artifact writer
//! - **Ports**: the `Filesystem` trait adapters implement
//! - **Errors**: application-specific error types
//!
//! Scanning and rendering rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactWriter, GenerateRequest, GenerateService, GenerationPlan, GenerationReport,
    WriteOptions, dut_file_name,
};

pub use ports::Filesystem;

pub use error::ApplicationError;

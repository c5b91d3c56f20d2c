//! uvmgen Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for generating UVM verification
//! environments from HDL module declarations.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            uvmgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, ArtifactWriter)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     uvmgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ModuleScanner, EnvironmentDescriptor, │
//! │          renderers, naming)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uvmgen_core::application::{GenerateRequest, GenerateService};
//! # fn run(filesystem: Box<dyn uvmgen_core::application::ports::Filesystem>) {
//! let service = GenerateService::new(filesystem);
//! let request = GenerateRequest::new("bus", "rtl/bus.v", "out");
//! let report = service.generate(&request).unwrap();
//! println!("wrote {} files", report.written.len());
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        ArtifactWriter, GenerateRequest, GenerateService, GenerationPlan, GenerationReport,
        WriteOptions, ports::Filesystem,
    };
    pub use crate::domain::{
        ArtifactKind, EnvironmentDescriptor, GeneratedArtifact, ModuleScanner, ModuleSignature,
        Port, PortDirection, ScanOptions, WriteResult,
    };
    pub use crate::error::{UvmgenError, UvmgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

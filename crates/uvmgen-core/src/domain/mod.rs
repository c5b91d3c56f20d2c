//! Core domain layer for uvmgen.
//!
//! Pure logic with no I/O: the port model, the module scanner, the
//! environment descriptor, the naming scheme and the template renderers.
//! Reading sources and writing artifacts go through ports defined in the
//! application layer.

pub mod entities;
pub mod error;
pub mod naming;
pub mod render;
pub mod scanner;
pub mod value_objects;

mod validation;

pub use entities::{
    EnvironmentDescriptor, EnvironmentDescriptorBuilder, GeneratedArtifact, ModuleSignature, Port,
    WriteResult,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::Role;
pub use render::{RenderContext, render, render_all};
pub use scanner::{ModuleScanner, ScanOptions};
pub use validation::DomainValidator;
pub use value_objects::{ArtifactKind, PortDirection, SignalKind};

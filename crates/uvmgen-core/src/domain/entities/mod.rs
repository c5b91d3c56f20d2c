pub mod artifact;
pub mod environment;
pub mod module_signature;
pub mod port;

pub use artifact::{GeneratedArtifact, WriteResult};
pub use environment::{EnvironmentDescriptor, EnvironmentDescriptorBuilder};
pub use module_signature::ModuleSignature;
pub use port::Port;

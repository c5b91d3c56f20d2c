pub mod artifact_writer;
pub mod generate_service;

pub use artifact_writer::{ArtifactWriter, WriteOptions};
pub use generate_service::{
    GenerateRequest, GenerateService, GenerationPlan, GenerationReport, dut_file_name,
};

//! The environment descriptor: everything a renderer may read.

use serde::Serialize;

use crate::domain::{
    entities::{module_signature::ModuleSignature, port::Port},
    error::DomainError,
    validation::DomainValidator as validator,
};

/// Default number of master agents the base test asks the environment for.
pub const DEFAULT_AGENT_COUNT: u32 = 1;

/// Default extension for generated files.
pub const DEFAULT_FILE_EXTENSION: &str = "sv";

/// Immutable input to every renderer.
///
/// Only obtainable through [`EnvironmentDescriptor::builder`], which validates
/// all fields up front. Renderers can therefore assume a well-formed
/// descriptor and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentDescriptor {
    env_name: String,
    ports: Vec<Port>,
    dut_file: String,
    dut_module: String,
    agent_count: u32,
    file_extension: String,
}

impl EnvironmentDescriptor {
    pub fn builder() -> EnvironmentDescriptorBuilder {
        EnvironmentDescriptorBuilder::default()
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn dut_file(&self) -> &str {
        &self.dut_file
    }

    pub fn dut_module(&self) -> &str {
        &self.dut_module
    }

    pub fn agent_count(&self) -> u32 {
        self.agent_count
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }
}

/// Builder for [`EnvironmentDescriptor`].
#[derive(Debug, Default)]
pub struct EnvironmentDescriptorBuilder {
    env_name: Option<String>,
    ports: Vec<Port>,
    dut_file: Option<String>,
    dut_module: Option<String>,
    agent_count: Option<u32>,
    file_extension: Option<String>,
}

impl EnvironmentDescriptorBuilder {
    pub fn env_name(mut self, name: impl Into<String>) -> Self {
        self.env_name = Some(name.into());
        self
    }

    pub fn ports(mut self, ports: Vec<Port>) -> Self {
        self.ports = ports;
        self
    }

    /// Take the DUT module name and its ports from a scanned signature.
    pub fn module(mut self, signature: ModuleSignature) -> Self {
        self.dut_module = Some(signature.name().to_string());
        self.ports = signature.into_ports();
        self
    }

    pub fn dut_file(mut self, file: impl Into<String>) -> Self {
        self.dut_file = Some(file.into());
        self
    }

    pub fn dut_module(mut self, module: impl Into<String>) -> Self {
        self.dut_module = Some(module.into());
        self
    }

    pub fn agent_count(mut self, count: u32) -> Self {
        self.agent_count = Some(count);
        self
    }

    pub fn file_extension(mut self, ext: impl Into<String>) -> Self {
        self.file_extension = Some(ext.into());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// [`DomainError::MalformedDescriptor`] naming the first offending field.
    pub fn build(self) -> Result<EnvironmentDescriptor, DomainError> {
        let env_name = self.env_name.unwrap_or_default();
        validator::validate_env_name(&env_name)?;

        let dut_module = self
            .dut_module
            .ok_or_else(|| DomainError::malformed("dut_module", "is required"))?;
        validator::validate_module_name(&dut_module)?;

        let dut_file = self
            .dut_file
            .ok_or_else(|| DomainError::malformed("dut_file", "is required"))?;
        validator::validate_dut_file(&dut_file)?;

        let agent_count = self.agent_count.unwrap_or(DEFAULT_AGENT_COUNT);
        validator::validate_agent_count(agent_count)?;

        let file_extension = self
            .file_extension
            .unwrap_or_else(|| DEFAULT_FILE_EXTENSION.to_string());
        validator::validate_file_extension(&file_extension)?;

        Ok(EnvironmentDescriptor {
            env_name,
            ports: self.ports,
            dut_file,
            dut_module,
            agent_count,
            file_extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PortDirection;

    fn base() -> EnvironmentDescriptorBuilder {
        EnvironmentDescriptor::builder()
            .env_name("bus")
            .dut_file("bus.v")
            .dut_module("bus_top")
    }

    #[test]
    fn builds_with_defaults() {
        let desc = base().build().unwrap();
        assert_eq!(desc.env_name(), "bus");
        assert_eq!(desc.agent_count(), DEFAULT_AGENT_COUNT);
        assert_eq!(desc.file_extension(), "sv");
        assert!(desc.ports().is_empty());
    }

    #[test]
    fn empty_env_name_is_malformed() {
        let err = base().env_name("").build().unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedDescriptor {
                field: "env_name",
                ..
            }
        ));
    }

    #[test]
    fn missing_env_name_is_malformed() {
        let err = EnvironmentDescriptor::builder()
            .dut_file("a.v")
            .dut_module("a")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedDescriptor {
                field: "env_name",
                ..
            }
        ));
    }

    #[test]
    fn missing_dut_module_is_malformed() {
        let err = EnvironmentDescriptor::builder()
            .env_name("bus")
            .dut_file("a.v")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedDescriptor {
                field: "dut_module",
                ..
            }
        ));
    }

    #[test]
    fn zero_agents_is_malformed() {
        assert!(base().agent_count(0).build().is_err());
    }

    #[test]
    fn module_sets_name_and_ports_in_order() {
        let sig = ModuleSignature::new(
            "fifo",
            vec![
                Port::new("clk", PortDirection::Input, "").unwrap(),
                Port::new("dout", PortDirection::Output, "[7:0]").unwrap(),
            ],
            true,
        );
        let desc = EnvironmentDescriptor::builder()
            .env_name("f")
            .dut_file("fifo.sv")
            .module(sig)
            .build()
            .unwrap();
        assert_eq!(desc.dut_module(), "fifo");
        let names: Vec<_> = desc.ports().iter().map(Port::name).collect();
        assert_eq!(names, ["clk", "dout"]);
    }
}

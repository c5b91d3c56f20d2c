use serde::{Deserialize, Serialize};

use crate::domain::entities::port::Port;

/// A module's name and its ports in declaration order.
///
/// Produced by [`ModuleScanner`](crate::domain::scanner::ModuleScanner).
/// Port order is significant: the testbench connects the DUT positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSignature {
    name: String,
    ports: Vec<Port>,
    /// `false` when input ended before `endmodule`.
    terminated: bool,
}

impl ModuleSignature {
    pub fn new(name: impl Into<String>, ports: Vec<Port>, terminated: bool) -> Self {
        Self {
            name: name.into(),
            ports,
            terminated,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn into_ports(self) -> Vec<Port> {
        self.ports
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }
}

//! Template renderers, one per artifact kind.
//!
//! Each `render_<kind>` is a pure function of the [`EnvironmentDescriptor`].
//! Templates are static text; every identifier and file name inside them
//! comes from a [`RenderContext`] placeholder, never a literal.

mod agent;
mod context;
mod driver;
mod env;
mod interface;
mod item;
mod monitor;
mod package;
mod scoreboard;
mod sequence;
mod tb_top;
mod test;

pub use agent::render_agent;
pub use context::RenderContext;
pub use driver::render_driver;
pub use env::render_env;
pub use interface::render_interface;
pub use item::render_item;
pub use monitor::render_monitor;
pub use package::render_package;
pub use scoreboard::render_scoreboard;
pub use sequence::render_sequence_library;
pub use tb_top::render_tb_top;
pub use test::render_test_library;

use crate::domain::{
    entities::{EnvironmentDescriptor, GeneratedArtifact},
    value_objects::ArtifactKind,
};

/// Render one artifact, path included.
pub fn render(kind: ArtifactKind, desc: &EnvironmentDescriptor) -> GeneratedArtifact {
    let content = match kind {
        ArtifactKind::Interface => render_interface(desc),
        ArtifactKind::Item => render_item(desc),
        ArtifactKind::Driver => render_driver(desc),
        ArtifactKind::Monitor => render_monitor(desc),
        ArtifactKind::Agent => render_agent(desc),
        ArtifactKind::Scoreboard => render_scoreboard(desc),
        ArtifactKind::Env => render_env(desc),
        ArtifactKind::SequenceLibrary => render_sequence_library(desc),
        ArtifactKind::TestLibrary => render_test_library(desc),
        ArtifactKind::Package => render_package(desc),
        ArtifactKind::TestbenchTop => render_tb_top(desc),
    };
    let path = kind.relative_path(desc.env_name(), desc.file_extension());
    GeneratedArtifact::new(kind, path, content)
}

/// All eleven artifacts in [`ArtifactKind::ALL`] order.
pub fn render_all(desc: &EnvironmentDescriptor) -> Vec<GeneratedArtifact> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| render(kind, desc))
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{
        entities::{EnvironmentDescriptor, Port},
        value_objects::PortDirection,
    };

    /// `bus` environment over `bus_top` with `n` ports cycling through
    /// scalar input, `[7:0]` output and `[3:0]` inout.
    pub(crate) fn descriptor(n: usize) -> EnvironmentDescriptor {
        let ports = (0..n)
            .map(|i| {
                let (dir, width) = match i % 3 {
                    0 => (PortDirection::Input, ""),
                    1 => (PortDirection::Output, "[7:0]"),
                    _ => (PortDirection::Inout, "[3:0]"),
                };
                Port::new(format!("p{i}"), dir, width).unwrap()
            })
            .collect();
        EnvironmentDescriptor::builder()
            .env_name("bus")
            .dut_file("bus.v")
            .dut_module("bus_top")
            .ports(ports)
            .build()
            .unwrap()
    }
}

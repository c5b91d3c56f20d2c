use crate::domain::{
    entities::{EnvironmentDescriptor, Port},
    render::RenderContext,
};

const TEMPLATE: &str = r##"interface {{IF}};

  // Control flags
  bit has_checks = 1;
  bit has_coverage = 1;

  // Actual signals
{{SIGNALS}}
endinterface: {{IF}}
"##;

pub fn render_interface(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc)
        .with_variable("SIGNALS", signals(desc.ports()))
        .render(TEMPLATE)
}

/// One `  <kind> [width] <name>; // <direction>` line per port.
fn signals(ports: &[Port]) -> String {
    ports
        .iter()
        .map(|port| {
            let kind = port.direction().signal_kind();
            if port.is_scalar() {
                format!("  {kind} {}; // {}\n", port.name(), port.direction())
            } else {
                format!(
                    "  {kind} {} {}; // {}\n",
                    port.width(),
                    port.name(),
                    port.direction()
                )
            }
        })
        .collect()
}

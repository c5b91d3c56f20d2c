use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

// Include order is dependency order: each file only references classes
// included above it.
const TEMPLATE: &str = r##"package {{PKG}};

  import uvm_pkg::*;
  `include "uvm_macros.svh"

  `include "{{ITEM_FILE}}"
  `include "{{DRV_FILE}}"
  `include "{{MON_FILE}}"
  `include "{{AGENT_FILE}}"
  `include "{{SCOREBOARD_FILE}}"
  `include "{{ENV_FILE}}"
  `include "{{SEQ_LIB_FILE}}"
  `include "{{TEST_LIB_FILE}}"

endpackage: {{PKG}}
"##;

pub fn render_package(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

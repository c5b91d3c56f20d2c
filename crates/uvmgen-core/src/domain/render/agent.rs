use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{AGENT}} extends uvm_agent;

  uvm_active_passive_enum is_active;

  // UVM automation macros
  `uvm_component_utils_begin({{AGENT}})
    `uvm_field_enum(uvm_active_passive_enum, is_active, UVM_ALL_ON)
  `uvm_component_utils_end

  // Constructor
  function new (string name, uvm_component parent);
    super.new(name, parent);
  endfunction: new

  uvm_sequencer #({{ITEM}}) sequencer;
  {{DRIVER}} driver;
  {{MONITOR}} monitor;

  // Use build_phase to create the agent's subcomponents
  virtual function void build_phase(uvm_phase phase);
    super.build_phase(phase);
    monitor = {{MONITOR}}::type_id::create("monitor", this);
    if (is_active == UVM_ACTIVE) begin
      // Build the sequencer and driver
      sequencer =
      uvm_sequencer#({{ITEM}})::type_id::create("sequencer", this);
      driver = {{DRIVER}}::type_id::create("driver", this);
    end
  endfunction: build_phase

  virtual function void connect_phase(uvm_phase phase);
    if (is_active == UVM_ACTIVE) begin
      driver.seq_item_port.connect(sequencer.seq_item_export);
    end
  endfunction: connect_phase

endclass: {{AGENT}}
"##;

pub fn render_agent(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

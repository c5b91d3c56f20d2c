use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{SCOREBOARD}} extends uvm_scoreboard;

  uvm_analysis_imp #({{ITEM}}, {{SCOREBOARD}}) item_collected_export;

  protected bit disable_scoreboard = 0;
  int sb_error = 0;

  // Provide implementations of virtual methods such as get_type_name and create
  `uvm_component_utils_begin({{SCOREBOARD}})
    `uvm_field_int(disable_scoreboard, UVM_ALL_ON)
  `uvm_component_utils_end

  // Constructor
  function new (string name, uvm_component parent);
    super.new(name, parent);
  endfunction: new

  function void build_phase(uvm_phase phase);
    item_collected_export = new("item_collected_export", this);
  endfunction: build_phase

  // Provide implementation of write()
  virtual function void write({{ITEM}} trans);
    if (!disable_scoreboard) begin
    end
  endfunction: write

endclass: {{SCOREBOARD}}
"##;

pub fn render_scoreboard(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

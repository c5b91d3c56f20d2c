use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{BASE_SEQ}} extends uvm_sequence #({{ITEM}});

  rand int count;
  constraint c1 { count > 0; count < 10; }

  // Register with the factory
  `uvm_object_utils_begin({{BASE_SEQ}})
    `uvm_field_int(count, UVM_ALL_ON)
  `uvm_object_utils_end

  // The sequence's constructor
  function new (string name = "{{BASE_SEQ}}");
    super.new(name);
  endfunction: new

  virtual task body();
    `uvm_info(get_type_name(), $sformatf("has %0d item(s)", count), UVM_LOW)
    repeat (count)
      `uvm_do(req)
  endtask: body

  virtual task pre_body();
    if (starting_phase != null)
      starting_phase.raise_objection(this);
  endtask: pre_body

  virtual task post_body();
    if (starting_phase != null)
      starting_phase.drop_objection(this);
  endtask: post_body

endclass: {{BASE_SEQ}}
"##;

pub fn render_sequence_library(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{ITEM}} extends uvm_sequence_item;

  rand int unsigned addr;
  rand int unsigned data;
  rand int unsigned delay;

  constraint c1 {addr < 16'h2000;}
  constraint c2 {data < 16'h1000;}

  // UVM automation macros for general objects
  `uvm_object_utils_begin({{ITEM}})
    `uvm_field_int(addr, UVM_ALL_ON)
    `uvm_field_int(data, UVM_ALL_ON)
    `uvm_field_int(delay, UVM_ALL_ON)
  `uvm_object_utils_end

  // Constructor
  function new (string name = "{{ITEM}}");
    super.new(name);
  endfunction: new

endclass: {{ITEM}}
"##;

pub fn render_item(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::fixtures::descriptor;

    #[test]
    fn registers_with_factory() {
        let out = render_item(&descriptor(0));
        assert!(out.starts_with("class bus_item extends uvm_sequence_item;"));
        assert!(out.contains("`uvm_object_utils_begin(bus_item)"));
        assert!(out.contains("function new (string name = \"bus_item\");"));
    }
}

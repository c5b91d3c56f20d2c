use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{DRIVER}} extends uvm_driver #({{ITEM}});

  {{ITEM}} item;
  virtual {{IF}} vif;

  // UVM automation macros for general components
  `uvm_component_utils({{DRIVER}})

  // Constructor
  function new (string name = "{{DRIVER}}", uvm_component parent);
    super.new(name, parent);
  endfunction: new

  function void build_phase(uvm_phase phase);
    super.build_phase(phase);
    if (!uvm_config_db#(virtual {{IF}})::get(this, "", "vif", vif))
      `uvm_fatal("NOVIF", {"virtual interface must be set for: ",
      get_full_name(), ".vif"});
  endfunction: build_phase

  virtual task run_phase(uvm_phase phase);
    forever begin
      // Get the next data item from sequencer (may block)
      seq_item_port.get_next_item(item);
      // Execute the item
      drive_item(item);
      seq_item_port.item_done(); // Consume the request
    end
  endtask: run_phase

  virtual task drive_item (input {{ITEM}} item);
    // Add your logic here.
    `uvm_info(get_type_name(), "driving item", UVM_LOW)

    fork
      begin
      end
      begin
      end
    join_any
    disable fork;

    #10;
  endtask: drive_item

endclass: {{DRIVER}}
"##;

pub fn render_driver(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::fixtures::descriptor;

    #[test]
    fn parameterized_on_item_and_fetches_vif() {
        let out = render_driver(&descriptor(0));
        assert!(out.starts_with("class bus_driver extends uvm_driver #(bus_item);"));
        assert!(out.contains("virtual bus_if vif;"));
        assert!(out.contains("uvm_config_db#(virtual bus_if)::get("));
        assert!(out.contains("virtual task drive_item (input bus_item item);"));
        assert!(out.trim_end().ends_with("endclass: bus_driver"));
    }
}

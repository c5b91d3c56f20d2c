use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{ENV}} extends uvm_env;

  // Virtual interface variable
  protected virtual interface {{IF}} vif;

  // Control properties
  protected int num_masters = 0;

  // Components of the env
  {{AGENT}} masters[];
  {{SCOREBOARD}} scoreboard0;

  `uvm_component_utils_begin({{ENV}})
    `uvm_field_int(num_masters, UVM_ALL_ON)
  `uvm_component_utils_end

  virtual function void build_phase(uvm_phase phase);
    string inst_name;
    super.build_phase(phase);

    if (!uvm_config_db#(virtual {{IF}})::get(this, "", "vif", vif))
      `uvm_fatal("NOVIF", {"virtual interface must be set for: ", get_full_name(), ".vif"});

    if (num_masters == 0)
      `uvm_fatal("NONUM", {"'num_masters' must be set for: ", get_full_name()});

    uvm_config_db#(int)::set(this,
      "masters*", "is_active", UVM_ACTIVE);

    masters = new[num_masters];
    for (int i = 0; i < num_masters; i++) begin
      $sformat(inst_name, "masters[%0d]", i);
      masters[i] = {{AGENT}}::type_id::create(inst_name, this);
    end

    scoreboard0 = {{SCOREBOARD}}::type_id::create("scoreboard0", this);

    // Build slaves and other components

  endfunction: build_phase

  virtual function void connect_phase(uvm_phase phase);
    // Connect monitor to scoreboard
    masters[0].monitor.item_collected_port.connect(
      scoreboard0.item_collected_export);
  endfunction: connect_phase

  // Constructor
  function new (string name, uvm_component parent);
    super.new(name, parent);
  endfunction: new

endclass: {{ENV}}
"##;

pub fn render_env(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::fixtures::descriptor;

    #[test]
    fn creates_masters_and_connects_scoreboard() {
        let out = render_env(&descriptor(0));
        assert!(out.starts_with("class bus_env extends uvm_env;"));
        assert!(out.contains("bus_agent masters[];"));
        assert!(out.contains("masters[i] = bus_agent::type_id::create(inst_name, this);"));
        assert!(out.contains("scoreboard0.item_collected_export);"));
    }
}

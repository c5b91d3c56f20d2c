use crate::domain::{entities::EnvironmentDescriptor, render::RenderContext};

const TEMPLATE: &str = r##"class {{BASE_TEST}} extends uvm_test;

  `uvm_component_utils({{BASE_TEST}})

  {{ENV}} {{ENV_INST}};

  // The test's constructor
  function new (string name = "{{BASE_TEST}}",
    uvm_component parent = null);
    super.new(name, parent);
  endfunction: new

  // Update this component's properties and create the {{ENV}} component
  virtual function void build_phase(uvm_phase phase);
    // Configuration that affects the environment's subcomponents must be
    // set before super.build_phase() creates them.
    uvm_config_db#(int)::set(this, "{{ENV_INST}}", "num_masters", {{AGENT_COUNT}});
    super.build_phase(phase);
    {{ENV_INST}} =
      {{ENV}}::type_id::create("{{ENV_INST}}", this);
    // Sequences start in a later phase, so the default sequence can be set here.
    uvm_config_db#(uvm_object_wrapper)::
      set(this, "{{ENV_INST}}.masters[0].sequencer.run_phase",
      "default_sequence", {{BASE_SEQ}}::type_id::get());
  endfunction: build_phase

  function void end_of_elaboration_phase(uvm_phase phase);
    uvm_top.print_topology();
  endfunction: end_of_elaboration_phase

  virtual task run_phase(uvm_phase phase);
    // Set a drain-time for the environment if desired
    phase.phase_done.set_drain_time(this, 5000);
  endtask: run_phase

endclass: {{BASE_TEST}}
"##;

pub fn render_test_library(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc).render(TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EnvironmentDescriptor;

    fn with_agents(n: u32) -> EnvironmentDescriptor {
        EnvironmentDescriptor::builder()
            .env_name("bus")
            .dut_file("bus.v")
            .dut_module("bus_top")
            .agent_count(n)
            .build()
            .unwrap()
    }

    #[test]
    fn num_masters_follows_agent_count() {
        let one = render_test_library(&with_agents(1));
        assert!(one.contains("\"num_masters\", 1);"));

        let four = render_test_library(&with_agents(4));
        assert!(four.contains("\"num_masters\", 4);"));
    }

    #[test]
    fn starts_base_sequence_on_first_master() {
        let out = render_test_library(&with_agents(1));
        assert!(out.contains("bus_env bus_env0;"));
        assert!(out.contains("\"bus_env0.masters[0].sequencer.run_phase\""));
        assert!(out.contains("bus_base_seq::type_id::get()"));
    }
}

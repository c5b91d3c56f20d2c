use crate::domain::{
    entities::{EnvironmentDescriptor, Port},
    render::RenderContext,
};

// The interface is included ahead of the package because the package's
// classes hold `virtual` handles to it.
const TEMPLATE: &str = r##"`include "{{IF_FILE}}"
`include "{{PKG_FILE}}"

`include "{{DUT_FILE}}"

module {{TB_TOP}};

  import uvm_pkg::*;
  import {{PKG}}::*;

  {{IF}} vif(); // SystemVerilog interface

{{DUT_INSTANCE}}

  initial begin
    uvm_config_db#(virtual {{IF}})::set(null, "*.{{ENV_INST}}*", "vif", vif);
    run_test();
  end

  initial begin
    //vif.sig_reset <= 1'b1;
    //vif.sig_clock <= 1'b1;
    //#50 vif.sig_reset = 1'b0;
  end

  // Generate clock
  //always
  //  #5 vif.sig_clock = ~vif.sig_clock;

  // Dump FSDB
  `ifdef FSDB
  initial begin
    $fsdbDumpfile("novas.fsdb");
    $fsdbDumpvars(0, {{TB_TOP}});
    $fsdbDumpflush;
  end
  `endif

endmodule: {{TB_TOP}}
"##;

pub fn render_tb_top(desc: &EnvironmentDescriptor) -> String {
    RenderContext::from_descriptor(desc)
        .with_variable("DUT_INSTANCE", dut_instance(desc.dut_module(), desc.ports()))
        .render(TEMPLATE)
}

/// DUT instantiation with ports connected positionally to `vif`.
fn dut_instance(module: &str, ports: &[Port]) -> String {
    if ports.is_empty() {
        return format!("  {module} dut();");
    }
    let connections = ports
        .iter()
        .map(|port| format!("    vif.{}", port.name()))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("  {module} dut(\n{connections}\n  );")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::render::fixtures::descriptor;

    #[test]
    fn zero_ports_instantiates_without_connections() {
        let out = render_tb_top(&descriptor(0));
        assert!(out.contains("\n  bus_top dut();\n"));
        assert!(!out.contains("vif.p"));
    }

    #[test]
    fn single_port_has_no_separator() {
        let out = render_tb_top(&descriptor(1));
        assert!(out.contains("  bus_top dut(\n    vif.p0\n  );\n"));
    }

    #[test]
    fn separators_between_ports_only() {
        let out = render_tb_top(&descriptor(3));
        assert!(out.contains("  bus_top dut(\n    vif.p0,\n    vif.p1,\n    vif.p2\n  );\n"));
        let conn_lines: Vec<_> = out.lines().filter(|l| l.starts_with("    vif.")).collect();
        assert_eq!(conn_lines.len(), 3);
        assert_eq!(conn_lines.iter().filter(|l| l.ends_with(',')).count(), 2);
    }

    #[test]
    fn includes_interface_package_and_dut() {
        let out = render_tb_top(&descriptor(0));
        let if_pos = out.find("`include \"bus_if.sv\"").unwrap();
        let pkg_pos = out.find("`include \"bus_pkg.sv\"").unwrap();
        let dut_pos = out.find("`include \"bus.v\"").unwrap();
        assert!(if_pos < pkg_pos && pkg_pos < dut_pos);
        assert!(out.contains("import bus_pkg::*;"));
        assert!(out.contains("module bus_tb_top;"));
    }

    #[test]
    fn publishes_vif_to_env_instance() {
        let out = render_tb_top(&descriptor(2));
        assert!(out.contains(
            "uvm_config_db#(virtual bus_if)::set(null, \"*.bus_env0*\", \"vif\", vif);"
        ));
    }
}

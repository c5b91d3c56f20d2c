//! Integration tests for the uvmgen-core public API: scan a realistic
//! source, build a descriptor and check the rendered environment agrees
//! with itself.

use uvmgen_core::domain::{
    ArtifactKind, DomainError, EnvironmentDescriptor, ModuleScanner, PortDirection, Role,
    render_all,
};

const SOURCE: &str = r#"
// Simple synchronous FIFO plus a wrapper.
`timescale 1ns/1ps

module fifo_ctrl (clk, rst_n, push, pop, full);
  input clk;
  input rst_n;
  input push;
  input pop;
  output full;
  assign full = 1'b0;
endmodule

module fifo_top #(
  parameter WIDTH = 8
) (
  input  wire             clk,
  input  wire             rst_n,
  input  wire [WIDTH-1:0] din,
  output reg  [WIDTH-1:0] dout,
  inout  wire [3:0]       dbg
);
  fifo_ctrl u_ctrl (.clk(clk), .rst_n(rst_n), .push(1'b0), .pop(1'b0), .full());
endmodule
"#;

fn descriptor_for(top: &str) -> EnvironmentDescriptor {
    let sig = ModuleScanner::new().scan(SOURCE, Some(top)).unwrap();
    EnvironmentDescriptor::builder()
        .env_name("fifo")
        .dut_file("fifo.sv")
        .module(sig)
        .agent_count(2)
        .build()
        .unwrap()
}

#[test]
fn scans_named_module_among_several() {
    let sig = ModuleScanner::new().scan(SOURCE, Some("fifo_top")).unwrap();
    let ports: Vec<_> = sig
        .ports()
        .iter()
        .map(|p| (p.name(), p.direction(), p.width()))
        .collect();
    assert_eq!(
        ports,
        [
            ("clk", PortDirection::Input, ""),
            ("rst_n", PortDirection::Input, ""),
            ("din", PortDirection::Input, "[WIDTH-1:0]"),
            ("dout", PortDirection::Output, "[WIDTH-1:0]"),
            ("dbg", PortDirection::Inout, "[3:0]"),
        ]
    );
}

#[test]
fn defaults_to_first_module() {
    let sig = ModuleScanner::new().scan(SOURCE, None).unwrap();
    assert_eq!(sig.name(), "fifo_ctrl");
    assert_eq!(sig.port_count(), 5);
}

#[test]
fn unknown_module_reports_candidates() {
    let err = ModuleScanner::new().scan(SOURCE, Some("fifo")).unwrap_err();
    assert!(err.suggestions().iter().any(|s| s.contains("fifo_top")));
    assert!(matches!(err, DomainError::ModuleNotFound { .. }));
}

#[test]
fn interface_and_testbench_agree_on_port_order() {
    let artifacts = render_all(&descriptor_for("fifo_top"));
    let content = |kind| {
        artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.content.as_str())
            .unwrap()
    };

    let declared: Vec<_> = content(ArtifactKind::Interface)
        .lines()
        .filter(|l| l.contains("; // "))
        .map(|l| l.split(';').next().unwrap().rsplit(' ').next().unwrap())
        .collect();
    let connected: Vec<_> = content(ArtifactKind::TestbenchTop)
        .lines()
        .filter_map(|l| l.trim().strip_prefix("vif."))
        .map(|l| l.trim_end_matches(','))
        .collect();

    assert_eq!(declared, ["clk", "rst_n", "din", "dout", "dbg"]);
    assert_eq!(declared, connected);
    assert!(content(ArtifactKind::Interface).contains("  wire [3:0] dbg; // inout\n"));
    assert!(content(ArtifactKind::TestbenchTop).contains("  fifo_top dut(\n"));
}

#[test]
fn package_includes_every_class_file_once() {
    let artifacts = render_all(&descriptor_for("fifo_top"));
    let pkg = &artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Package)
        .unwrap()
        .content;

    for artifact in &artifacts {
        let file = artifact.path.file_name().unwrap().to_str().unwrap();
        let expected = match artifact.kind {
            ArtifactKind::Interface | ArtifactKind::Package | ArtifactKind::TestbenchTop => 0,
            _ => 1,
        };
        assert_eq!(pkg.matches(file).count(), expected, "{file}");
    }
}

#[test]
fn cross_references_use_role_identifiers() {
    let artifacts = render_all(&descriptor_for("fifo_top"));
    let env = &artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::Env)
        .unwrap()
        .content;
    for role in [Role::Agent, Role::Scoreboard, Role::If] {
        assert!(env.contains(&role.ident("fifo")), "{role}");
    }
    let test_lib = &artifacts
        .iter()
        .find(|a| a.kind == ArtifactKind::TestLibrary)
        .unwrap()
        .content;
    assert!(test_lib.contains("\"num_masters\", 2);"));
}

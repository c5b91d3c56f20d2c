//! Line-oriented module scanner.
//!
//! Finds one module declaration in free-form HDL text and extracts its port
//! declarations in order. This is deliberately not a parser: it makes a
//! single forward pass over the lines, recognizes three line shapes (module
//! header, port declaration, `endmodule`) and ignores everything else.
//!
//! Recognized port lines start (after indentation) with a direction keyword,
//! followed by any run of type tokens (`wire`, `logic`, `bit`, `my_pkg::t`,
//! ...) and bracketed widths, then the signal name:
//!
//! ```text
//! input clk;
//! output reg [7:0] data;
//! inout wire signed [3:0][7:0] bus,
//! input my_pkg::req_t req
//! ```
//!
//! Only the first signal of a line is taken. `input a, b;` yields `a` alone.
//! Ports written on the `module` header line itself are not scanned; such a
//! header is logged at WARN, as is any direction line that does not parse.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::domain::{
    entities::{ModuleSignature, Port},
    error::DomainError,
    validation::HDL_IDENT,
    value_objects::PortDirection,
};

static MODULE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s*module\s+({HDL_IDENT})")).expect("module header regex")
});

/// Direction keyword, then the declaration text up to its terminator.
static PORT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(input|output|inout)\b((?:\s*(?:\[[^\]]*\]|{HDL_IDENT}(?:::{HDL_IDENT})*))*)\s*(?:[;,)=]|//|$)"
    ))
    .expect("port declaration regex")
});

/// One token of a declaration: a bracketed width or a (possibly scoped) name.
static DECL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\[[^\]]*\]|{HDL_IDENT}(?:::{HDL_IDENT})*")).expect("token regex")
});

static DIRECTION_LEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:input|output|inout)\b").expect("direction regex"));

static DIRECTION_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:input|output|inout)\b").expect("direction regex"));

static MODULE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*endmodule\b").expect("endmodule regex"));

/// Strictness switches. Both off by default, which makes the scanner lenient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Fail with [`DomainError::NoPortsFound`] instead of returning an empty list.
    pub require_ports: bool,
    /// Fail with [`DomainError::UnterminatedModule`] when input ends before `endmodule`.
    pub require_end_marker: bool,
}

impl ScanOptions {
    pub fn strict() -> Self {
        Self {
            require_ports: true,
            require_end_marker: true,
        }
    }
}

/// Where the scan is. Lives only for the duration of one [`ModuleScanner::scan`].
#[derive(Debug)]
enum ScanState {
    SeekingModule,
    InPorts { module: String, ports: Vec<Port> },
    Done { module: String, ports: Vec<Port> },
}

#[derive(Debug, Clone, Default)]
pub struct ModuleScanner {
    options: ScanOptions,
}

impl ModuleScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Locate a module and return its ports.
    ///
    /// With `target`, the first header whose name equals it is used; without,
    /// the first header in the text.
    ///
    /// # Errors
    ///
    /// - [`DomainError::ModuleNotFound`] when no header qualifies
    /// - [`DomainError::NoPortsFound`] / [`DomainError::UnterminatedModule`]
    ///   only when the matching [`ScanOptions`] switch is on
    #[instrument(skip(self, source), fields(bytes = source.len()))]
    pub fn scan(&self, source: &str, target: Option<&str>) -> Result<ModuleSignature, DomainError> {
        let mut state = ScanState::SeekingModule;

        for (idx, line) in source.lines().enumerate() {
            if matches!(state, ScanState::Done { .. }) {
                break;
            }
            state = match state {
                ScanState::SeekingModule => match header_name(line) {
                    Some(name) if target.is_none_or(|t| t == name) => {
                        debug!(module = name, "found module header");
                        if header_declares_ports(line) {
                            warn!(
                                module = name,
                                line = idx + 1,
                                "ports on the module header line are not scanned; \
                                 put each port on its own line"
                            );
                        }
                        ScanState::InPorts {
                            module: name.to_string(),
                            ports: Vec::new(),
                        }
                    }
                    _ => ScanState::SeekingModule,
                },
                ScanState::InPorts { module, mut ports } => {
                    if MODULE_END.is_match(line) {
                        ScanState::Done { module, ports }
                    } else {
                        if let Some(port) = parse_port(line) {
                            debug!(port = %port, "port");
                            ports.push(port);
                        } else if DIRECTION_LEAD.is_match(line) {
                            warn!(
                                module = %module,
                                line = idx + 1,
                                text = line.trim(),
                                "skipping unrecognized port declaration"
                            );
                        }
                        ScanState::InPorts { module, ports }
                    }
                }
                done @ ScanState::Done { .. } => done,
            };
        }

        let (module, ports, terminated) = match state {
            ScanState::SeekingModule => {
                return Err(DomainError::ModuleNotFound {
                    target: target.map(str::to_string),
                    available: Self::module_names(source),
                });
            }
            ScanState::InPorts { module, ports } => (module, ports, false),
            ScanState::Done { module, ports } => (module, ports, true),
        };

        if !terminated {
            if self.options.require_end_marker {
                return Err(DomainError::UnterminatedModule { module });
            }
            warn!(module = %module, "input ended before 'endmodule'; using ports seen so far");
        }
        if ports.is_empty() && self.options.require_ports {
            return Err(DomainError::NoPortsFound { module });
        }

        debug!(module = %module, ports = ports.len(), terminated, "scan complete");
        Ok(ModuleSignature::new(module, ports, terminated))
    }

    /// Every module header in textual order.
    pub fn module_names(source: &str) -> Vec<String> {
        source
            .lines()
            .filter_map(header_name)
            .map(str::to_string)
            .collect()
    }
}

fn header_name(line: &str) -> Option<&str> {
    MODULE_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text after the header name that holds a direction keyword, as in
/// `module fifo (input clk,`.
fn header_declares_ports(line: &str) -> bool {
    MODULE_HEADER
        .find(line)
        .is_some_and(|m| DIRECTION_ANYWHERE.is_match(&line[m.end()..]))
}

/// Every bracketed token before the name is width; every other token before
/// it is type. The name is the last token and must be a plain identifier.
fn parse_port(line: &str) -> Option<Port> {
    let caps = PORT_DECL.captures(line)?;
    let direction: PortDirection = caps[1].parse().ok()?;
    let tokens: Vec<&str> = DECL_TOKEN
        .find_iter(caps.get(2).map_or("", |m| m.as_str()))
        .map(|m| m.as_str())
        .collect();

    let (name, head) = tokens.split_last()?;
    if name.starts_with('[') || name.contains("::") {
        return None;
    }
    let width: String = head.iter().filter(|t| t.starts_with('[')).copied().collect();
    Port::new(*name, direction, width).ok()
}

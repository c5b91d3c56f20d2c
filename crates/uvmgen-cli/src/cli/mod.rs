//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "uvmgen",
    bin_name = "uvmgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "UVM verification environment generator",
    long_about = "uvmgen reads a Verilog/SystemVerilog module declaration and \
                  generates a complete UVM environment for it: interface, \
                  sequence item, driver, monitor, agent, scoreboard, env, \
                  sequence and test libraries, package and testbench top.",
    after_help = "EXAMPLES:\n\
        \x20 uvmgen generate -n fifo -f rtl/fifo.v -o verif\n\
        \x20 uvmgen generate -n fifo -f rtl/soc.v -t fifo_ctrl -o verif --agents 2\n\
        \x20 uvmgen scan -f rtl/fifo.v\n\
        \x20 uvmgen completions bash > /usr/share/bash-completion/completions/uvmgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a UVM environment from a module declaration.
    #[command(
        visible_alias = "gen",
        about = "Generate a UVM environment",
        after_help = "EXAMPLES:\n\
            \x20 uvmgen generate -n fifo -f rtl/fifo.v -o verif\n\
            \x20 uvmgen generate -n fifo -f rtl/fifo.v.erb -o verif --ext svh\n\
            \x20 uvmgen generate -n fifo -f rtl/fifo.v -o verif --dry-run"
    )]
    Generate(GenerateArgs),

    /// Show the ports uvmgen would extract from a module file.
    #[command(
        about = "Scan a module file and print its ports",
        after_help = "EXAMPLES:\n\
            \x20 uvmgen scan -f rtl/fifo.v\n\
            \x20 uvmgen scan -f rtl/soc.v --list\n\
            \x20 uvmgen scan -f rtl/soc.v -t fifo_ctrl --output-format json"
    )]
    Scan(ScanArgs),

    /// Initialise a uvmgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 uvmgen init           # default location\n\
            \x20 uvmgen init --force   # replace an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 uvmgen completions bash > ~/.local/share/bash-completion/completions/uvmgen\n\
            \x20 uvmgen completions zsh  > ~/.zfunc/_uvmgen\n\
            \x20 uvmgen completions fish > ~/.config/fish/completions/uvmgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the uvmgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 uvmgen config get generate.agent_count\n\
            \x20 uvmgen config list\n\
            \x20 uvmgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `uvmgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Environment name; prefixes every generated class and file.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "ENV",
        help = "Environment name (e.g. fifo)"
    )]
    pub name: String,

    /// Verilog/SystemVerilog file holding the DUT module.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "MODULE_FILE",
        help = "HDL file declaring the DUT module"
    )]
    pub file: PathBuf,

    /// Module to extract; the first module in the file when omitted.
    #[arg(
        short = 't',
        long = "top",
        value_name = "MODULE",
        help = "Top module name (default: first module in the file)"
    )]
    pub top: Option<String>,

    /// Directory that receives `<ENV>/`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// Number of agents the test library configures.
    #[arg(
        long = "agents",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Agent count (default from config, 1)"
    )]
    pub agents: Option<u32>,

    /// Extension for generated files, without the dot.
    #[arg(
        long = "ext",
        value_name = "EXT",
        help = "Generated file extension (default from config, sv)"
    )]
    pub ext: Option<String>,

    /// Overwrite files that already exist.
    #[arg(long = "force", help = "Overwrite existing generated files")]
    pub force: bool,

    /// Render everything but write nothing.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Fail on port-less or unterminated modules.
    #[arg(
        long = "strict",
        help = "Reject modules without ports or without 'endmodule'"
    )]
    pub strict: bool,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `uvmgen scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// File to scan.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "MODULE_FILE",
        help = "HDL file to scan"
    )]
    pub file: PathBuf,

    /// Module to resolve.
    #[arg(
        short = 't',
        long = "top",
        value_name = "MODULE",
        conflicts_with = "list",
        help = "Module name (default: first module in the file)"
    )]
    pub top: Option<String>,

    /// Only list module names.
    #[arg(long = "list", help = "List every module declared in the file")]
    pub list: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `uvmgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `uvmgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `uvmgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.agent_count`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

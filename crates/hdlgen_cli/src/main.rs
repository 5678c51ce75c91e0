//! hdlgen CLI — boilerplate generation for MyHDL/Verilog cosimulation.
//!
//! Provides `hdlgen modules` for listing the modules an external tagger
//! finds in a source file, and `hdlgen testbench` / `hdlgen bind` /
//! `hdlgen unittest` for generating testbench, cosimulation-binding, and
//! unit-test scaffolding from a module's extracted interface.

#![warn(missing_docs)]

mod bind;
mod modules;
mod pipeline;
mod testbench;
mod unittest;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use hdlgen_ctags::KindScheme;

/// hdlgen — HDL boilerplate generation driven by an external tagger.
#[derive(Parser, Debug)]
#[command(name = "hdlgen", version, about = "HDL boilerplate generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `hdlgen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the modules found in a source file.
    Modules(ModulesArgs),
    /// Generate a Verilog testbench skeleton.
    Testbench(GenArgs),
    /// Generate a MyHDL cosimulation binding (Python).
    Bind(GenArgs),
    /// Generate a MyHDL unit-test scaffold (Python).
    Unittest(GenArgs),
}

/// Arguments shared by the three generation subcommands.
#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Verilog/SystemVerilog source file to extract the module from.
    pub file: String,

    /// Module to use when the file declares more than one.
    #[arg(short, long)]
    pub module: Option<String>,

    /// Write the generated text to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the tagger kind vocabulary from the config file.
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,
}

/// Arguments for the `hdlgen modules` subcommand.
#[derive(Parser, Debug)]
pub struct ModulesArgs {
    /// Verilog/SystemVerilog source file to inspect.
    pub file: String,

    /// Output format for the module listing.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Override the tagger kind vocabulary from the config file.
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,
}

/// Module listing output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Tagger kind vocabulary selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    /// The `module`/`port`/`constant` vocabulary of older taggers.
    Legacy,
    /// The `module`/`input`/`output`/`parameter` vocabulary.
    Refined,
}

impl From<SchemeArg> for KindScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Legacy => KindScheme::Legacy,
            SchemeArg::Refined => KindScheme::Refined,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Modules(ref args) => modules::run(args, &global),
        Command::Testbench(ref args) => testbench::run(args, &global),
        Command::Bind(ref args) => bind::run(args, &global),
        Command::Unittest(ref args) => unittest::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

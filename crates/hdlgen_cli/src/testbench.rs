//! `hdlgen testbench` — Verilog testbench skeleton generation.

use crate::pipeline::{extract_interface, write_output};
use crate::{GenArgs, GlobalArgs};

/// Runs the `hdlgen testbench` command.
///
/// Extracts the module interface and renders the testbench skeleton to
/// stdout or `--output`. Returns exit code 0 on success.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (interface, config) = extract_interface(args, global)?;

    if !global.quiet {
        eprintln!(
            "   Generating testbench for `{}` ({} port(s), {} parameter(s))",
            interface.name,
            interface.ports.len(),
            interface.params.len()
        );
    }

    let text = hdlgen_emit::testbench::generate(&interface, &config.testbench.include_prefix);
    write_output(&text, args.output.as_deref(), "testbench", global)?;
    Ok(0)
}

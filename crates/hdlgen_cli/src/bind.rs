//! `hdlgen bind` — MyHDL cosimulation binding generation.

use crate::pipeline::{extract_interface, write_output};
use crate::{GenArgs, GlobalArgs};

/// Runs the `hdlgen bind` command.
///
/// Extracts the module interface and renders the Python cosimulation
/// binding to stdout or `--output`. Returns exit code 0 on success.
pub fn run(args: &GenArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (interface, config) = extract_interface(args, global)?;

    if !global.quiet {
        eprintln!(
            "   Generating cosimulation binding for `{}` ({} port(s), {} parameter(s))",
            interface.name,
            interface.ports.len(),
            interface.params.len()
        );
    }

    let text = hdlgen_emit::cosim::generate(&interface, &config.bind);
    write_output(&text, args.output.as_deref(), "cosimulation binding", global)?;
    Ok(0)
}

//! MyHDL cosimulation binding (Python) generation.
//!
//! The binding compiles the module under test with iverilog, passing
//! parameters as `-D` defines, declares `Ports`/`Params` namedtuples for
//! the module interface, and exposes a factory function returning a
//! `Cosimulation` wired through the MyHDL VPI module.

use crate::interface::ModuleInterface;
use crate::wrap::{named_tuple, push_wrapped};
use hdlgen_config::BindConfig;

const HEADER: &str = "import os\n\
     from collections import namedtuple\n\n\
     from myhdl import Cosimulation\n\n\n";

/// Renders the cosimulation binding for `module`.
pub fn generate(module: &ModuleInterface, bind: &BindConfig) -> String {
    let params_lower: Vec<String> = module.params.iter().map(|p| p.to_lowercase()).collect();
    let param_refs: Vec<&str> = params_lower.iter().map(String::as_str).collect();

    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(&compile_command(
        &module.name,
        &param_refs,
        &bind.sources_path,
    ));
    out.push_str(&named_tuple("Ports", "ports", &module.port_names()));
    out.push_str("\n\n");
    out.push_str(&named_tuple("Params", "params", &param_refs));
    out.push_str("\n\n\n");
    out.push_str(&factory(&module.name, &param_refs, &bind.vpi_path));
    out
}

/// Renders the iverilog compile command as a wrapped Python string:
///
/// ```text
/// cmd = ('iverilog -o counter.o -I ../../sources -Dwidth=%s '
///        'test_counter.v')
/// ```
fn compile_command(name: &str, params_lower: &[&str], sources_path: &str) -> String {
    // Quoted-string continuation: close the literal, reopen it aligned
    // under the opening parenthesis.
    let continuation = "'\n       '";
    let mut cmd = format!("cmd = ('iverilog -o {name}.o ");
    push_wrapped(&mut cmd, &format!("-I {sources_path} "), continuation);
    for param in params_lower {
        push_wrapped(&mut cmd, &format!("-D{param}=%s "), continuation);
    }
    push_wrapped(&mut cmd, &format!("test_{name}.v')"), continuation);
    cmd.push_str("\n\n\n");
    cmd
}

/// Renders the factory function substituting parameter values into the
/// compile command and returning the `Cosimulation`.
fn factory(name: &str, params_lower: &[&str], vpi_path: &str) -> String {
    let mut out = format!("def {name}(ports, params):\n");
    if params_lower.is_empty() {
        out.push_str("\tos.system(cmd)\n");
    } else {
        out.push_str("\tos.system(cmd % (");
        for (i, param) in params_lower.iter().enumerate() {
            if i != 0 {
                // Aligned under the opening parenthesis of `cmd % (`.
                out.push_str("\t                 ");
            }
            out.push_str(&format!("params.{param}"));
            if i + 1 != params_lower.len() {
                out.push_str(",\n");
            } else {
                out.push_str("))\n");
            }
        }
    }
    out.push_str(&format!(
        "\treturn Cosimulation(\"vvp -m {vpi_path} {name}.o\",\n"
    ));
    out.push_str("\t                    **ports._asdict())\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::PortDecl;
    use crate::wrap::MAX_WIDTH;

    fn bind_config() -> BindConfig {
        BindConfig {
            sources_path: "../../sources".to_string(),
            vpi_path: "myhdl.vpi".to_string(),
        }
    }

    fn counter() -> ModuleInterface {
        ModuleInterface {
            name: "counter".to_string(),
            ports: vec![
                PortDecl {
                    name: "clk".to_string(),
                    bus: None,
                },
                PortDecl {
                    name: "count".to_string(),
                    bus: Some("[7:0]".to_string()),
                },
            ],
            params: vec!["WIDTH".to_string()],
        }
    }

    #[test]
    fn imports_come_first() {
        let text = generate(&counter(), &bind_config());
        assert!(text.starts_with("import os\nfrom collections import namedtuple\n"));
        assert!(text.contains("from myhdl import Cosimulation\n"));
    }

    #[test]
    fn compile_command_lists_defines() {
        let text = generate(&counter(), &bind_config());
        assert!(text.contains(
            "cmd = ('iverilog -o counter.o -I ../../sources -Dwidth=%s test_counter.v')"
        ));
    }

    #[test]
    fn namedtuples_for_ports_and_params() {
        let text = generate(&counter(), &bind_config());
        assert!(text.contains("Ports = namedtuple('ports', 'clk, count')"));
        // Parameter names are lowercased in the generated Python.
        assert!(text.contains("Params = namedtuple('params', 'width')"));
    }

    #[test]
    fn factory_substitutes_params() {
        let text = generate(&counter(), &bind_config());
        assert!(text.contains("def counter(ports, params):\n"));
        assert!(text.contains("\tos.system(cmd % (params.width))\n"));
        assert!(text.contains("\treturn Cosimulation(\"vvp -m myhdl.vpi counter.o\",\n"));
        assert!(text.contains("\t                    **ports._asdict())\n"));
    }

    #[test]
    fn factory_with_several_params_aligns_continuations() {
        let module = ModuleInterface {
            params: vec!["WIDTH".to_string(), "DEPTH".to_string()],
            ..counter()
        };
        let text = generate(&module, &bind_config());
        assert!(text.contains("\tos.system(cmd % (params.width,\n\t                 params.depth))\n"));
    }

    #[test]
    fn factory_without_params_stays_balanced() {
        let module = ModuleInterface {
            params: Vec::new(),
            ..counter()
        };
        let text = generate(&module, &bind_config());
        assert!(text.contains("\tos.system(cmd)\n"));
        assert!(!text.contains("cmd % ("));
        assert!(!text.contains("-D"));
    }

    #[test]
    fn long_interfaces_wrap_under_the_limit() {
        let module = ModuleInterface {
            name: "wide".to_string(),
            ports: (0..24)
                .map(|i| PortDecl {
                    name: format!("port_name_{i:02}"),
                    bus: None,
                })
                .collect(),
            params: (0..8).map(|i| format!("PARAM_NAME_{i:02}")).collect(),
        };
        let text = generate(&module, &bind_config());
        for line in text.lines() {
            assert!(line.len() <= MAX_WIDTH, "line too long: {line:?}");
        }
    }
}

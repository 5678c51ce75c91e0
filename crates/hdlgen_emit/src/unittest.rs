//! Python unittest scaffold generation.
//!
//! The scaffold drives the cosimulation binding: a `runTest` helper that
//! builds the `Ports`/`Params` tuples, a clock generator, and one example
//! test the user fills in. The port and parameter lists come from the
//! module interface; signal construction is left as a FIXME since value
//! widths and reset behavior are the user's call.

use crate::interface::ModuleInterface;
use crate::wrap::{push_call_args, push_wrapped};

/// Renders the unittest scaffold for `module`.
pub fn generate(module: &ModuleInterface) -> String {
    let mut out = String::new();
    out.push_str(&header(&module.name));
    out.push_str(&test_class(module));
    out
}

fn header(name: &str) -> String {
    format!(
        "import unittest\n\n\
         from myhdl import Signal, intbv, Simulation, always, delay, StopSimulation\n\n\
         from {name} import {name}, Ports, Params\n\n\n"
    )
}

fn test_class(module: &ModuleInterface) -> String {
    let params_lower: Vec<String> = module.params.iter().map(|p| p.to_lowercase()).collect();
    let ports = module.port_names();

    let mut cls = format!("class Test{}(unittest.TestCase):\n\n", module.name);

    // def runTest(self, test, width, depth, delay_ns=10):
    cls.push_str("\tdef runTest(self, test, ");
    for param in &params_lower {
        push_wrapped(&mut cls, &format!("{param}, "), "\n\t        ");
    }
    push_wrapped(&mut cls, "delay_ns=10):", "\n\t        ");
    cls.push('\n');

    cls.push_str("\t\t# FIXME: Instantiate registers and wires as `Signals`\n\t\t");
    cls.push_str(&ports.join(", "));
    cls.push_str("\n\n");

    cls.push_str("\t\tports = Ports(");
    push_call_args(&mut cls, &ports, "\t\t              ");
    cls.push_str("\n\n");

    let param_refs: Vec<&str> = params_lower.iter().map(String::as_str).collect();
    cls.push_str("\t\tparams = Params(");
    push_call_args(&mut cls, &param_refs, "\t\t                ");
    cls.push_str("\n\n");

    cls.push_str(&format!("\t\tdut = {}(ports, params)\n\n", module.name));

    cls.push_str("\t\t@always(delay(delay_ns))\n");
    cls.push_str("\t\tdef clockGen():\n");
    cls.push_str("\t\t\tclk.next = not clk\n\n");

    cls.push_str("\t\tcheck = test(ports, params)\n\n");

    cls.push_str("\t\tsim = Simulation(dut, clockGen, check)\n");
    cls.push_str("\t\tsim.run()\n\n");

    cls.push_str("\tdef testExample(self):\n");
    cls.push_str("\t\tdef test(ports, params):\n");
    cls.push_str("\t\t\tyield ports.clk.negedge\n");
    cls.push_str("\t\t\tports.rst.next = 0\n");
    cls.push_str("\t\t\tyield ports.clk.negedge\n");
    cls.push_str("\t\t\traise StopSimulation\n\n");
    cls.push_str("\t\t# FIXME: Add parameters to function call\n");
    cls.push_str("\t\tself.runTest(test)\n\n\n");

    cls.push_str("if __name__ == '__main__':\n");
    cls.push_str("\tunittest.main(verbosity=2)\n");
    cls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::PortDecl;
    use crate::wrap::MAX_WIDTH;

    fn counter() -> ModuleInterface {
        ModuleInterface {
            name: "counter".to_string(),
            ports: vec![
                PortDecl {
                    name: "clk".to_string(),
                    bus: None,
                },
                PortDecl {
                    name: "rst".to_string(),
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
    fn imports_reference_the_binding() {
        let text = generate(&counter());
        assert!(text.starts_with("import unittest\n\n"));
        assert!(text.contains("from counter import counter, Ports, Params\n"));
    }

    #[test]
    fn run_test_signature_lists_lowercased_params() {
        let text = generate(&counter());
        assert!(text.contains("\tdef runTest(self, test, width, delay_ns=10):\n"));
    }

    #[test]
    fn tuples_built_from_interface() {
        let text = generate(&counter());
        assert!(text.contains("\t\tports = Ports(clk, rst, count)\n"));
        assert!(text.contains("\t\tparams = Params(width)\n"));
        assert!(text.contains("\t\tdut = counter(ports, params)\n"));
    }

    #[test]
    fn clock_and_simulation_scaffolding() {
        let text = generate(&counter());
        assert!(text.contains("\t\t@always(delay(delay_ns))\n\t\tdef clockGen():\n"));
        assert!(text.contains("\t\tsim = Simulation(dut, clockGen, check)\n\t\tsim.run()\n"));
        assert!(text.ends_with("if __name__ == '__main__':\n\tunittest.main(verbosity=2)\n"));
    }

    #[test]
    fn fixme_markers_left_for_the_user() {
        let text = generate(&counter());
        assert!(text.contains("# FIXME: Instantiate registers and wires as `Signals`"));
        assert!(text.contains("# FIXME: Add parameters to function call"));
    }

    #[test]
    fn long_param_lists_wrap_in_signature_and_tuples() {
        let module = ModuleInterface {
            name: "wide".to_string(),
            ports: (0..16)
                .map(|i| PortDecl {
                    name: format!("port_name_{i:02}"),
                    bus: None,
                })
                .collect(),
            params: (0..10).map(|i| format!("PARAM_NAME_{i:02}")).collect(),
        };
        let text = generate(&module);
        let signature_start = text.find("\tdef runTest").unwrap();
        let signature_end = text[signature_start..].find(":\n").unwrap() + signature_start;
        let signature = &text[signature_start..signature_end];
        assert!(signature.lines().count() > 1);
        for line in signature.lines() {
            assert!(line.len() <= MAX_WIDTH, "line too long: {line:?}");
        }
        let tuple_start = text.find("\t\tports = Ports(").unwrap();
        let tuple_end = text[tuple_start..].find(")\n").unwrap() + tuple_start;
        for line in text[tuple_start..tuple_end].lines() {
            assert!(line.len() <= MAX_WIDTH, "line too long: {line:?}");
        }
    }

    #[test]
    fn no_params_keeps_signature_minimal() {
        let module = ModuleInterface {
            params: Vec::new(),
            ..counter()
        };
        let text = generate(&module);
        assert!(text.contains("\tdef runTest(self, test, delay_ns=10):\n"));
        assert!(text.contains("\t\tparams = Params()\n"));
    }
}

//! Verilog testbench skeleton generation.
//!
//! The skeleton declares one `reg` per port group, instantiates the module
//! under test as `<name>_tb` with aligned `.port (port)` connections, ties
//! parameters through `defparam`, and leaves an `initial` block wired for
//! `$from_myhdl`/`$to_myhdl` for the user to fill in.

use crate::interface::{ModuleInterface, PortDecl};

/// Renders a testbench skeleton for `module`.
///
/// `include_prefix` is the directory part of the generated `` `include ``
/// directive pointing at the module source.
pub fn generate(module: &ModuleInterface, include_prefix: &str) -> String {
    let mut out = String::new();
    out.push_str(&header(&module.name, include_prefix));
    out.push_str(&net_declarations(&module.ports));
    out.push_str(&initial_block());
    out.push_str(&instantiation(module));
    out.push_str(&tie_params(&module.name, &module.params));
    out.push_str("endmodule\n");
    out
}

fn header(name: &str, include_prefix: &str) -> String {
    format!(
        "`timescale 1ns / 1ps\n\
         `include \"{include_prefix}/{name}.v\"\n\n\
         module {name}_tests;\n\n"
    )
}

/// Declares the testbench nets, grouping consecutive ports that share a
/// bus width onto one `reg` line:
///
/// ```text
/// reg clk, rst;
/// reg [7:0] data, mask;
/// reg done;
/// ```
fn net_declarations(ports: &[PortDecl]) -> String {
    if ports.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let mut i = 0;
    while i < ports.len() {
        let bus = &ports[i].bus;
        let mut j = i;
        while j < ports.len() && ports[j].bus == *bus {
            j += 1;
        }
        out.push_str("reg ");
        if let Some(bus) = bus {
            out.push_str(bus);
            out.push(' ');
        }
        let names: Vec<&str> = ports[i..j].iter().map(|p| p.name.as_str()).collect();
        out.push_str(&names.join(", "));
        out.push_str(";\n");
        i = j;
    }
    out.push('\n');
    out
}

fn initial_block() -> String {
    "initial begin\n\
     \t$from_myhdl()\n\
     \t$to_myhdl()\n\
     end\n\n"
        .to_string()
}

/// Renders the instantiation of the module under test, with a `#(...)`
/// parameter block only when the module has parameters.
fn instantiation(module: &ModuleInterface) -> String {
    let mut out = format!("{} ", module.name);
    if !module.params.is_empty() {
        let params: Vec<&str> = module.params.iter().map(String::as_str).collect();
        out.push_str(&format!("\n#(\n{})\n", connection_list(&params)));
    }
    out.push_str(&format!("{}_tb(\n", module.name));
    out.push_str(&connection_list(&module.port_names()));
    out.push_str(");\n\n");
    out
}

/// Renders `.name (name)` connection lines, padded so the parentheses
/// line up across the list.
fn connection_list(names: &[&str]) -> String {
    let max_len = names.iter().map(|n| n.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        let padded = format!("{name:<width$}", width = max_len + 1);
        out.push_str(&format!("\t.{padded}({padded})"));
        if i + 1 != names.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out
}

/// Ties each parameter of the instantiated testbench to a macro of the
/// same (lowercased) name via `defparam`.
fn tie_params(module_name: &str, params: &[String]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for param in params {
        out.push_str(&format!(
            "`defparam {module_name}_tb.{param} = `{}\n",
            param.to_lowercase()
        ));
    }
    out.push('\n');
    out
}

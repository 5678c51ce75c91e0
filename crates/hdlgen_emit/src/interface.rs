//! The generator-facing view of one module.

use hdlgen_ctags::{KindScheme, Symbol, SymbolTable};

/// One port of a module, with its optional bus width.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PortDecl {
    /// Port name.
    pub name: String,
    /// Raw bus expression (e.g. `[7:0]`) for vector ports, `None` for
    /// scalars.
    pub bus: Option<String>,
}

/// The extracted interface of one module: name, ports, and parameters, all
/// in declaration order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ModuleInterface {
    /// Module name.
    pub name: String,
    /// Ports in declaration order.
    pub ports: Vec<PortDecl>,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
}

impl ModuleInterface {
    /// Collects the interface of `module` from the table, mapping the
    /// scheme's port and parameter kinds onto the table's children
    /// queries. Declaration order is preserved; under the refined scheme
    /// inputs and outputs interleave as written in the source.
    pub fn from_table(table: &SymbolTable, module: &Symbol, scheme: KindScheme) -> Self {
        let ports = table
            .children_of_any(module, scheme.port_kinds())
            .into_iter()
            .map(|s| PortDecl {
                name: s.name.clone(),
                bus: s.bus.clone(),
            })
            .collect();
        let params = table
            .children_of_any(module, scheme.param_kinds())
            .into_iter()
            .map(|s| s.name.clone())
            .collect();
        Self {
            name: module.name.clone(),
            ports,
            params,
        }
    }

    /// Port names in declaration order.
    pub fn port_names(&self) -> Vec<&str> {
        self.ports.iter().map(|p| p.name.as_str()).collect()
    }
}

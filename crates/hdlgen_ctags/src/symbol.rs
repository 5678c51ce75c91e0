//! The symbol data model: declaration kinds, tagger vocabularies, and the
//! [`Symbol`] record itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a declaration reported by the external tagger.
///
/// The vocabulary is tagger-version-dependent: older taggers report Verilog
/// ports as `port` and parameters as `constant`, newer ones report
/// `input`/`output`/`parameter` directly. [`KindScheme`] names the two
/// vocabularies; a table only ever retains kinds from one of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A `module` declaration.
    Module,
    /// An `input` port (refined vocabulary).
    Input,
    /// An `output` port (refined vocabulary).
    Output,
    /// A `parameter` declaration (refined vocabulary).
    Parameter,
    /// A port of unspecified direction (legacy vocabulary).
    Port,
    /// A parameter reported as `constant` (legacy vocabulary).
    Constant,
}

impl SymbolKind {
    /// Maps a declaration keyword to a kind.
    ///
    /// Returns `None` for keywords outside the recognized vocabulary
    /// (`task`, `function`, `register`, ... from real taggers); the table
    /// skips such entries rather than treating them as failures.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "module" => Some(SymbolKind::Module),
            "input" => Some(SymbolKind::Input),
            "output" => Some(SymbolKind::Output),
            "parameter" => Some(SymbolKind::Parameter),
            "port" => Some(SymbolKind::Port),
            "constant" => Some(SymbolKind::Constant),
            _ => None,
        }
    }

    /// The declaration keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Input => "input",
            SymbolKind::Output => "output",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Port => "port",
            SymbolKind::Constant => "constant",
        }
    }

    /// Returns `true` for the directional port kinds whose declarations can
    /// carry a bus width expression.
    pub fn carries_bus(self) -> bool {
        matches!(self, SymbolKind::Input | SymbolKind::Output)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named interest set matching one tagger vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindScheme {
    /// The 3-kind `module`/`port`/`constant` vocabulary of older taggers.
    #[default]
    Legacy,
    /// The 4-kind `module`/`input`/`output`/`parameter` vocabulary.
    Refined,
}

impl KindScheme {
    /// The kinds retained at ingest time under this scheme.
    pub fn interest(self) -> &'static [SymbolKind] {
        match self {
            KindScheme::Legacy => &[SymbolKind::Module, SymbolKind::Port, SymbolKind::Constant],
            KindScheme::Refined => &[
                SymbolKind::Module,
                SymbolKind::Input,
                SymbolKind::Output,
                SymbolKind::Parameter,
            ],
        }
    }

    /// The kinds that represent ports under this scheme.
    ///
    /// Under [`Refined`](KindScheme::Refined) both directions are ports;
    /// queries over several kinds preserve declaration order, so inputs and
    /// outputs interleave exactly as written in the source.
    pub fn port_kinds(self) -> &'static [SymbolKind] {
        match self {
            KindScheme::Legacy => &[SymbolKind::Port],
            KindScheme::Refined => &[SymbolKind::Input, SymbolKind::Output],
        }
    }

    /// The kinds that represent parameters under this scheme.
    pub fn param_kinds(self) -> &'static [SymbolKind] {
        match self {
            KindScheme::Legacy => &[SymbolKind::Constant],
            KindScheme::Refined => &[SymbolKind::Parameter],
        }
    }
}

/// The enclosing construct of a nested declaration.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ParentScope {
    /// Kind of the enclosing construct (`module` for ports and parameters).
    pub kind: SymbolKind,
    /// Name of the enclosing construct. For a declaration inside a nested
    /// module this is the module's dotted qualified name.
    pub scope: String,
}

/// One declaration found in a source file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Symbol {
    /// Identifier text, preserved verbatim from the tag line.
    pub name: String,
    /// Declaration kind.
    pub kind: SymbolKind,
    /// Raw bit-range expression (e.g. `[7:0]`) for vector ports.
    /// `None` means a scalar signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
    /// Enclosing construct, or `None` for top-level declarations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentScope>,
}

impl Symbol {
    /// The scope string this symbol's children are tagged with.
    ///
    /// Children of a top-level module carry the module's name; children of
    /// a nested module carry `outer.inner`. This composition is what keeps
    /// two same-named ports of different modules apart.
    pub fn qualified_scope(&self) -> String {
        match &self.parent {
            Some(parent) if !parent.scope.is_empty() => {
                format!("{}.{}", parent.scope, self.name)
            }
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_roundtrip() {
        for kind in [
            SymbolKind::Module,
            SymbolKind::Input,
            SymbolKind::Output,
            SymbolKind::Parameter,
            SymbolKind::Port,
            SymbolKind::Constant,
        ] {
            assert_eq!(SymbolKind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn unknown_keywords() {
        assert_eq!(SymbolKind::from_keyword("task"), None);
        assert_eq!(SymbolKind::from_keyword("register"), None);
        assert_eq!(SymbolKind::from_keyword(""), None);
        // Keywords are case-sensitive, like the language itself.
        assert_eq!(SymbolKind::from_keyword("Module"), None);
    }

    #[test]
    fn carries_bus_only_for_directional_ports() {
        assert!(SymbolKind::Input.carries_bus());
        assert!(SymbolKind::Output.carries_bus());
        assert!(!SymbolKind::Port.carries_bus());
        assert!(!SymbolKind::Module.carries_bus());
        assert!(!SymbolKind::Parameter.carries_bus());
        assert!(!SymbolKind::Constant.carries_bus());
    }

    #[test]
    fn display_uses_keyword() {
        assert_eq!(format!("{}", SymbolKind::Module), "module");
        assert_eq!(format!("{}", SymbolKind::Constant), "constant");
    }

    #[test]
    fn scheme_interest_sets() {
        assert_eq!(
            KindScheme::Legacy.interest(),
            &[SymbolKind::Module, SymbolKind::Port, SymbolKind::Constant]
        );
        assert_eq!(
            KindScheme::Refined.interest(),
            &[
                SymbolKind::Module,
                SymbolKind::Input,
                SymbolKind::Output,
                SymbolKind::Parameter
            ]
        );
    }

    #[test]
    fn scheme_query_kinds() {
        assert_eq!(KindScheme::Legacy.port_kinds(), &[SymbolKind::Port]);
        assert_eq!(
            KindScheme::Refined.port_kinds(),
            &[SymbolKind::Input, SymbolKind::Output]
        );
        assert_eq!(KindScheme::Legacy.param_kinds(), &[SymbolKind::Constant]);
        assert_eq!(KindScheme::Refined.param_kinds(), &[SymbolKind::Parameter]);
    }

    #[test]
    fn scheme_deserializes_lowercase() {
        let scheme: KindScheme = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(scheme, KindScheme::Legacy);
        let scheme: KindScheme = serde_json::from_str("\"refined\"").unwrap();
        assert_eq!(scheme, KindScheme::Refined);
    }

    #[test]
    fn qualified_scope_toplevel() {
        let module = Symbol {
            name: "counter".to_string(),
            kind: SymbolKind::Module,
            bus: None,
            parent: None,
        };
        assert_eq!(module.qualified_scope(), "counter");
    }

    #[test]
    fn qualified_scope_nested() {
        let module = Symbol {
            name: "inner".to_string(),
            kind: SymbolKind::Module,
            bus: None,
            parent: Some(ParentScope {
                kind: SymbolKind::Module,
                scope: "outer".to_string(),
            }),
        };
        assert_eq!(module.qualified_scope(), "outer.inner");
    }
}

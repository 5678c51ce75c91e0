//! The symbol table: ingest-time kind filtering, ordered storage, and
//! scope-resolution queries.

use crate::line::{parse_line, LineParseError};
use crate::symbol::{KindScheme, Symbol, SymbolKind};

/// A recorded failure for one malformed tag line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseFailure {
    /// The offending line, verbatim.
    pub line: String,
    /// What went wrong.
    pub error: LineParseError,
}

/// Why a single module could not be resolved from the table.
///
/// These are user-visible conditions, not internal errors: the caller
/// reports them and returns early, nothing panics or aborts.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ModuleResolveError {
    /// The table contains no module symbols at all.
    #[error("no modules found")]
    NoModuleFound,
    /// More than one module and no name was requested.
    #[error("multiple modules found: {}", .candidates.join(", "))]
    AmbiguousModule {
        /// Names of all modules in the table, in declaration order.
        candidates: Vec<String>,
    },
    /// A requested name matched no module.
    #[error("module '{name}' not found (available: {})", .candidates.join(", "))]
    UnknownModule {
        /// The requested module name.
        name: String,
        /// Names of all modules in the table, in declaration order.
        candidates: Vec<String>,
    },
}

/// An ordered collection of [`Symbol`]s extracted from one tagger run.
///
/// A table is created with an interest set, populated from a single raw
/// tagger payload, and then queried read-only; it owns its symbols
/// exclusively and is discarded when the enclosing command completes.
/// Create one table per extraction.
#[derive(Debug)]
pub struct SymbolTable {
    interest: Vec<SymbolKind>,
    symbols: Vec<Symbol>,
    failures: Vec<ParseFailure>,
}

impl SymbolTable {
    /// Creates an empty table retaining the kinds of the given scheme.
    pub fn new(scheme: KindScheme) -> Self {
        Self::with_interest(scheme.interest().to_vec())
    }

    /// Creates an empty table retaining exactly the given kinds.
    pub fn with_interest(interest: Vec<SymbolKind>) -> Self {
        Self {
            interest,
            symbols: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Ingests a raw tagger payload.
    ///
    /// Splits on line boundaries (bare `\n` and `\r\n` both work), skips
    /// blank lines, and decodes each remaining line. Malformed lines are
    /// recorded in [`failures`](Self::failures) and skipped — a single bad
    /// line never aborts the extraction. Lines whose kind falls outside
    /// the interest set, or outside the vocabulary entirely, are dropped
    /// at ingest so the table stays small.
    ///
    /// Calling `parse` again **replaces** the previous contents rather
    /// than appending, so a reused table never accumulates duplicates.
    pub fn parse(&mut self, raw: &str) {
        self.symbols.clear();
        self.failures.clear();
        for line in raw.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(Some(symbol)) if self.interest.contains(&symbol.kind) => {
                    self.symbols.push(symbol);
                }
                Ok(_) => {}
                Err(error) => self.failures.push(ParseFailure {
                    line: line.to_string(),
                    error,
                }),
            }
        }
    }

    /// All retained symbols, in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Recorded failures for malformed lines, in input order.
    pub fn failures(&self) -> &[ParseFailure] {
        &self.failures
    }

    /// Returns `true` if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols of one kind, in declaration order.
    pub fn find_by_kind(&self, kind: SymbolKind) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| s.kind == kind).collect()
    }

    /// All module symbols, in declaration order.
    pub fn modules(&self) -> Vec<&Symbol> {
        self.find_by_kind(SymbolKind::Module)
    }

    /// Children of `module` with the given kind, in declaration order.
    pub fn children_of(&self, module: &Symbol, kind: SymbolKind) -> Vec<&Symbol> {
        self.children_of_any(module, &[kind])
    }

    /// Children of `module` with any of the given kinds, in declaration
    /// order.
    ///
    /// A child is a symbol whose enclosing construct is a module and whose
    /// parent scope equals the qualified scope of `module`. Two modules
    /// declaring identically named ports never bleed into each other: the
    /// scope comparison keeps each port with its owner.
    ///
    /// A module with no children is valid; the result is simply empty.
    pub fn children_of_any(&self, module: &Symbol, kinds: &[SymbolKind]) -> Vec<&Symbol> {
        let scope = module.qualified_scope();
        self.symbols
            .iter()
            .filter(|s| {
                kinds.contains(&s.kind)
                    && s.parent
                        .as_ref()
                        .is_some_and(|p| p.kind == SymbolKind::Module && p.scope == scope)
            })
            .collect()
    }

    /// Resolves a single module from the table.
    ///
    /// With `requested == None` the table must contain exactly one module:
    /// zero yields [`NoModuleFound`](ModuleResolveError::NoModuleFound),
    /// two or more yield
    /// [`AmbiguousModule`](ModuleResolveError::AmbiguousModule) carrying
    /// the candidate names for the caller to choose from. With a requested
    /// name, the first module with that exact name wins.
    pub fn resolve_module(&self, requested: Option<&str>) -> Result<&Symbol, ModuleResolveError> {
        let modules = self.modules();
        if modules.is_empty() {
            return Err(ModuleResolveError::NoModuleFound);
        }
        match requested {
            Some(name) => modules
                .iter()
                .find(|m| m.name == name)
                .copied()
                .ok_or_else(|| ModuleResolveError::UnknownModule {
                    name: name.to_string(),
                    candidates: modules.iter().map(|m| m.name.clone()).collect(),
                }),
            None if modules.len() == 1 => Ok(modules[0]),
            None => Err(ModuleResolveError::AmbiguousModule {
                candidates: modules.iter().map(|m| m.name.clone()).collect(),
            }),
        }
    }
}

//! Decoding of individual tag lines.
//!
//! The external tagger emits one tab-separated record per declaration:
//!
//! ```text
//! clk	counter.v	3;" input clk	 	module:counter
//! ```
//!
//! Field 0 is the symbol name, kept verbatim. Field 2 combines an
//! ex-command source location with the declaration text; the first
//! declaration token is the kind keyword. Field 4, present only on
//! five-field lines, is a `kind:scope` pair naming the enclosing construct.

use crate::symbol::{ParentScope, Symbol, SymbolKind};

/// A structural failure while decoding one tag line.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum LineParseError {
    /// The line has fewer than the three mandatory tab-separated fields.
    #[error("expected at least 3 tab-separated fields, found {found}")]
    TooFewFields {
        /// Number of fields actually present.
        found: usize,
    },
    /// The name field is empty.
    #[error("empty symbol name")]
    EmptyName,
    /// The location field carries no declaration tokens.
    #[error("no declaration text in location field '{field}'")]
    MissingDeclaration {
        /// The offending location field.
        field: String,
    },
    /// The scope field is not a `kind:scope` pair.
    #[error("malformed scope field '{field}'")]
    MalformedScope {
        /// The offending scope field.
        field: String,
    },
}

/// Decodes one tag line into a [`Symbol`].
///
/// Returns `Ok(None)` when the line is well-formed but describes a
/// declaration outside the recognized kind vocabulary, or one nested in a
/// construct outside it (tasks, functions); such lines are ordinary tagger
/// output and are skipped silently. Structural problems yield an error and
/// never a panic — the table's ingest loop records them and continues.
pub fn parse_line(line: &str) -> Result<Option<Symbol>, LineParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return Err(LineParseError::TooFewFields {
            found: fields.len(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(LineParseError::EmptyName);
    }

    let tokens = declaration_tokens(fields[2])?;
    let Some(kind) = SymbolKind::from_keyword(tokens[0]) else {
        return Ok(None);
    };

    // A declaration can list flags between the keyword and the width
    // (`output reg [7:0] q`); the last bracketed token is the bus.
    let bus = if kind.carries_bus() {
        tokens[1..]
            .iter()
            .rev()
            .find(|t| t.contains('['))
            .map(|t| (*t).to_string())
    } else {
        None
    };

    let parent = if fields.len() == 5 {
        match parse_scope(fields[4])? {
            Some(parent) => Some(parent),
            None => return Ok(None),
        }
    } else {
        None
    };

    Ok(Some(Symbol {
        name: name.to_string(),
        kind,
        bus,
        parent,
    }))
}

/// Splits the composite location field into declaration tokens.
///
/// Two shapes occur in the wild:
///
/// - `3;" input clk` — a line-number ex-command; the declaration follows
///   the two-character `;"` marker.
/// - `/^input clk;$/;"` — a search-pattern ex-command; the declaration
///   follows the two-character `/^` prefix.
fn declaration_tokens(field: &str) -> Result<Vec<&str>, LineParseError> {
    let decl = match field.split_once(";\"") {
        Some((_, rest)) if !rest.trim().is_empty() => rest,
        _ => field.strip_prefix("/^").unwrap_or(field),
    };
    let tokens: Vec<&str> = decl.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(LineParseError::MissingDeclaration {
            field: field.to_string(),
        });
    }
    Ok(tokens)
}

/// Splits a `kind:scope` field at the first colon.
///
/// Returns `Ok(None)` when the parent kind keyword is outside the
/// vocabulary — the declaration is nested in a construct this model does
/// not track.
fn parse_scope(field: &str) -> Result<Option<ParentScope>, LineParseError> {
    let Some((keyword, scope)) = field.split_once(':') else {
        return Err(LineParseError::MalformedScope {
            field: field.to_string(),
        });
    };
    if scope.is_empty() {
        return Err(LineParseError::MalformedScope {
            field: field.to_string(),
        });
    }
    Ok(SymbolKind::from_keyword(keyword).map(|kind| ParentScope {
        kind,
        scope: scope.to_string(),
    }))
}

//! Shared pipeline helpers for CLI commands.
//!
//! Extraction steps common to all subcommands: source-path validation,
//! configuration discovery, tagger invocation with the degrade-to-empty
//! policy, parse-failure reporting, module resolution, and output writing.

use std::path::{Path, PathBuf};

use hdlgen_config::ToolConfig;
use hdlgen_ctags::{KindScheme, ModuleResolveError, SymbolTable, TagRunner};
use hdlgen_emit::ModuleInterface;

use crate::{GenArgs, GlobalArgs};

/// Walks up from `start` looking for the nearest directory containing
/// `hdlgen.toml`.
///
/// Returns `None` when no configuration file exists anywhere above
/// `start` — unlike a project manifest, the tool works fine on defaults.
pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("hdlgen.toml").exists() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolves the tool configuration for a run.
///
/// `--config` names a file explicitly (and must exist); otherwise the
/// nearest `hdlgen.toml` above the source file applies, and if there is
/// none the built-in defaults do.
pub fn resolve_config(
    global: &GlobalArgs,
    source: &Path,
) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = global.config {
        return Ok(hdlgen_config::load_config_file(Path::new(path))?);
    }
    let abs = source
        .canonicalize()
        .unwrap_or_else(|_| source.to_path_buf());
    let start = abs
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    match find_config_root(&start) {
        Some(root) => Ok(hdlgen_config::load_config(&root)?),
        None => Ok(ToolConfig::default()),
    }
}

/// Validates the positional source path.
///
/// A directory gets a listing of the HDL files inside it — the
/// non-interactive stand-in for the editor's file picker.
pub fn check_source_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.is_dir() {
        let files = discover_hdl_files(path)?;
        return Err(if files.is_empty() {
            format!(
                "'{}' is a directory with no .v/.sv files in it",
                path.display()
            )
            .into()
        } else {
            format!(
                "'{}' is a directory; choose one of: {}",
                path.display(),
                files.join(", ")
            )
            .into()
        });
    }
    if !path.exists() {
        return Err(format!("file '{}' does not exist", path.display()).into());
    }
    Ok(())
}

/// Lists `.v`/`.sv` files directly inside `dir`, sorted by name.
pub fn discover_hdl_files(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_hdl = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("v" | "sv")
        );
        if path.is_file() && is_hdl {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Runs the tagger and ingests its output into a fresh table.
///
/// A tagger failure degrades to empty output with a warning instead of
/// aborting: an empty table reads as "no symbols found" downstream, and
/// the command then surfaces that as its usual no-modules condition.
/// Malformed tag lines are reported under `--verbose`.
pub fn extract_symbols(
    file: &Path,
    config: &ToolConfig,
    scheme: KindScheme,
    global: &GlobalArgs,
) -> SymbolTable {
    let runner = TagRunner::new(config.tags.ctags.clone());
    if global.verbose {
        eprintln!("   Running {} on {}", runner.executable(), file.display());
    }
    let raw = match runner.run(file) {
        Ok(raw) => raw,
        Err(e) => {
            if !global.quiet {
                eprintln!("warning: {e}; treating as empty tagger output");
            }
            String::new()
        }
    };

    let mut table = SymbolTable::new(scheme);
    table.parse(&raw);

    if global.verbose {
        for failure in table.failures() {
            eprintln!(
                "warning: skipped malformed tag line '{}': {}",
                failure.line, failure.error
            );
        }
        eprintln!("   Found {} symbol(s)", table.symbols().len());
    }
    table
}

/// Resolves the requested module and collects its interface.
///
/// The no-module and ambiguous-module conditions come back as plain error
/// messages; the ambiguous case tells the user how to settle it.
pub fn resolve_interface(
    table: &SymbolTable,
    requested: Option<&str>,
    scheme: KindScheme,
) -> Result<ModuleInterface, Box<dyn std::error::Error>> {
    let module = match table.resolve_module(requested) {
        Ok(module) => module,
        Err(e @ ModuleResolveError::AmbiguousModule { .. }) => {
            return Err(format!("{e}; pass --module to choose one").into());
        }
        Err(e) => return Err(e.to_string().into()),
    };
    Ok(ModuleInterface::from_table(table, module, scheme))
}

/// Runs the shared extraction steps for a generation command: validate the
/// source path, resolve configuration and scheme, extract symbols, and
/// collect the requested module's interface.
pub fn extract_interface(
    args: &GenArgs,
    global: &GlobalArgs,
) -> Result<(ModuleInterface, ToolConfig), Box<dyn std::error::Error>> {
    let file = Path::new(&args.file);
    check_source_file(file)?;
    let config = resolve_config(global, file)?;
    let scheme = args
        .scheme
        .map(KindScheme::from)
        .unwrap_or(config.tags.scheme);
    let table = extract_symbols(file, &config, scheme, global);
    let interface = resolve_interface(&table, args.module.as_deref(), scheme)?;
    Ok((interface, config))
}

/// Writes generated text to `--output` or stdout.
pub fn write_output(
    text: &str,
    output: Option<&str>,
    description: &str,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            if !global.quiet {
                eprintln!("   Generated {description} at {path}");
            }
        }
        None => print!("{text}"),
    }
    Ok(())
}

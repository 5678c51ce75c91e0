//! `hdlgen modules` — list the modules a tagger finds in a file.
//!
//! The listing is the disambiguation aid for the generation commands:
//! when a file declares several modules, this shows what `--module` can
//! name. Text output includes per-module port/parameter counts; JSON
//! output carries the raw symbols.

use std::path::Path;

use hdlgen_ctags::KindScheme;

use crate::pipeline::{check_source_file, extract_symbols, resolve_config};
use crate::{GlobalArgs, ModulesArgs, ReportFormat};

/// Runs the `hdlgen modules` command.
///
/// Returns exit code 0 when at least one module was found, 1 otherwise —
/// the zero-modules condition is reported, not thrown.
pub fn run(args: &ModulesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let file = Path::new(&args.file);
    check_source_file(file)?;

    let config = resolve_config(global, file)?;
    let scheme = args
        .scheme
        .map(KindScheme::from)
        .unwrap_or(config.tags.scheme);

    let table = extract_symbols(file, &config, scheme, global);
    let modules = table.modules();

    match args.format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&modules).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
        ReportFormat::Text => {
            for module in &modules {
                let ports = table.children_of_any(module, scheme.port_kinds()).len();
                let params = table.children_of_any(module, scheme.param_kinds()).len();
                println!("{} ({ports} port(s), {params} parameter(s))", module.name);
            }
        }
    }

    if modules.is_empty() {
        if !global.quiet {
            eprintln!("no modules found in {}", file.display());
        }
        return Ok(1);
    }
    Ok(0)
}

//! Configuration types deserialized from `hdlgen.toml`.

use hdlgen_ctags::KindScheme;
use serde::Deserialize;

/// The top-level tool configuration parsed from `hdlgen.toml`.
///
/// Every section and field is optional; an empty document (or no file at
/// all) yields the built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    /// External tagger settings.
    #[serde(default)]
    pub tags: TagsConfig,
    /// Cosimulation binding generator settings.
    #[serde(default)]
    pub bind: BindConfig,
    /// Testbench generator settings.
    #[serde(default)]
    pub testbench: TestbenchConfig,
}

/// Settings for the external tagger.
#[derive(Debug, Deserialize)]
pub struct TagsConfig {
    /// Path to the tagger executable. The single option the runner
    /// recognizes; all other tool flags are fixed.
    #[serde(default = "default_ctags")]
    pub ctags: String,
    /// Which kind vocabulary the tagger emits (`legacy` or `refined`).
    #[serde(default)]
    pub scheme: KindScheme,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            ctags: default_ctags(),
            scheme: KindScheme::default(),
        }
    }
}

/// Settings for the cosimulation binding generator.
#[derive(Debug, Deserialize)]
pub struct BindConfig {
    /// Include directory passed to iverilog via `-I` in the generated
    /// compile command.
    #[serde(default = "default_sources_path")]
    pub sources_path: String,
    /// Path to the MyHDL VPI module passed to `vvp -m` in the generated
    /// `Cosimulation` call.
    #[serde(default = "default_vpi_path")]
    pub vpi_path: String,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            sources_path: default_sources_path(),
            vpi_path: default_vpi_path(),
        }
    }
}

/// Settings for the testbench generator.
#[derive(Debug, Deserialize)]
pub struct TestbenchConfig {
    /// Directory prefix used in the generated `` `include `` directive.
    #[serde(default = "default_include_prefix")]
    pub include_prefix: String,
}

impl Default for TestbenchConfig {
    fn default() -> Self {
        Self {
            include_prefix: default_include_prefix(),
        }
    }
}

fn default_ctags() -> String {
    "ctags".to_string()
}

fn default_sources_path() -> String {
    "../../sources".to_string()
}

fn default_vpi_path() -> String {
    "myhdl.vpi".to_string()
}

fn default_include_prefix() -> String {
    "../../sources".to_string()
}

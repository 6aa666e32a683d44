//! Simulator configuration.
//!
//! Use `Config::default()` for the standard setup, or deserialize a JSON
//! document to override parts of it. Every field has a default, so partial
//! configurations are valid.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Entry program counter: images are loaded at IMEM offset zero.
    pub const START_PC: u32 = 0;
}

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run control: entry point, tracing, cycle budget.
    pub general: GeneralConfig,
    /// Memory sizing.
    pub memory: MemoryConfig,
}

/// General run-control options.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Program counter at cycle zero. Must be 4-byte aligned.
    pub start_pc: u32,
    /// Per-cycle pipeline tracing on stderr.
    pub trace: bool,
    /// Maximum cycles before the run is reported as nonterminating.
    /// `None` runs without a budget.
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            trace: false,
            max_cycles: None,
        }
    }
}

/// Memory sizing options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Data memory bound in bytes; accesses at or beyond it fault.
    /// `None` backs the full 32-bit address space.
    pub dmem_limit: Option<u32>,
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

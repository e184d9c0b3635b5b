use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wasmtime::{Config, OptLevel};

use crate::engine::config_setup;
use crate::invoke::ExportPath;

pub const DEFAULT_WASM: &str = "../../calculator/composed.wasm";
pub const DEFAULT_EXPR: &str = "123";
pub const DEFAULT_INTERFACE: &str = "docs:calculator/calculate@0.1.0";
pub const DEFAULT_FUNC: &str = "eval-expression";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OptLevelArg {
    None,
    #[default]
    Speed,
    SpeedAndSize,
}

impl From<OptLevelArg> for OptLevel {
    fn from(level: OptLevelArg) -> Self {
        match level {
            OptLevelArg::None => OptLevel::None,
            OptLevelArg::Speed => OptLevel::Speed,
            OptLevelArg::SpeedAndSize => OptLevel::SpeedAndSize,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Host for evaluating expressions in a calculator Wasm component", long_about=None)]
pub struct CLI {
    /// Path to the WebAssembly component file
    #[arg(long, default_value = DEFAULT_WASM)]
    pub wasm: PathBuf,

    /// Expression to evaluate
    #[arg(long, default_value_t = String::from(DEFAULT_EXPR))]
    pub expr: String,

    /// Exported interface holding the evaluation function
    #[arg(long, default_value_t = String::from(DEFAULT_INTERFACE))]
    pub interface: String,

    /// Function to call within the exported interface
    #[arg(long, default_value_t = String::from(DEFAULT_FUNC))]
    pub func: String,

    #[arg(long, value_enum, default_value_t = OptLevelArg::default())]
    pub opt_level: OptLevelArg,

    #[arg(long, default_value_t = false)]
    pub debug_info: bool,
}

/// Everything a single run needs, resolved from the command line.
pub struct Knobs {
    pub config: Config,
    pub wasm: PathBuf,
    pub expr: String,
    pub export: ExportPath,
}

impl CLI {
    pub fn knobs(self) -> Knobs {
        Knobs {
            config: config_setup(self.opt_level, self.debug_info),
            wasm: self.wasm,
            expr: self.expr,
            export: ExportPath {
                interface: self.interface,
                func: self.func,
            },
        }
    }
}

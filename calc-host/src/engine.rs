use anyhow::{Context, Result, bail};
use std::path::Path;
use wasmtime::component::{Component, Instance, Linker};
use wasmtime::{Config, Engine, Store};

use crate::cli::OptLevelArg;

pub fn config_setup(opt_level: OptLevelArg, debug_info: bool) -> Config {
    let mut config = Config::default();
    config
        .wasm_component_model(true)
        .debug_info(debug_info)
        .cranelift_opt_level(opt_level.into());
    config
}

/// Read and compile the component at `path`.
///
/// Both binary components and their text format are accepted.
pub fn load_component(engine: &Engine, path: &Path) -> Result<Component> {
    if !path.exists() {
        bail!("WASM file not found: {}", path.display());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    let component = Component::new(engine, &bytes)
        .with_context(|| format!("Failed to compile component: {}", path.display()))?;
    Ok(component)
}

/// Instantiate with every import stubbed out as a trap.
pub fn instantiate(engine: &Engine, component: &Component) -> Result<(Store<()>, Instance)> {
    let mut linker = Linker::new(engine);
    linker.define_unknown_imports_as_traps(component)?;

    let mut store = Store::new(engine, ());
    let instance = linker.instantiate(&mut store, component)?;
    log::debug!("Instantiated component");
    Ok((store, instance))
}

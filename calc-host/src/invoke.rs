use anyhow::{Context, Result, bail};
use wasmtime::Engine;
use wasmtime::Store;
use wasmtime::component::{Component, ComponentExportIndex, Func, Instance, Val};

use crate::cli::Knobs;
use crate::engine::{instantiate, load_component};

/// Location of the called function: an exported interface and a function inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPath {
    pub interface: String,
    pub func: String,
}

pub fn resolve_export(component: &Component, path: &ExportPath) -> Result<ComponentExportIndex> {
    let Some(interface) = component.get_export_index(None, &path.interface) else {
        bail!("Export '{}' not found in component", path.interface);
    };
    let Some(func) = component.get_export_index(Some(&interface), &path.func) else {
        bail!("Export '{}' not found in component", path.func);
    };
    Ok(func)
}

pub fn lookup_func(
    store: &mut Store<()>,
    instance: &Instance,
    index: &ComponentExportIndex,
    name: &str,
) -> Result<Func> {
    match instance.get_func(&mut *store, index) {
        Some(func) => Ok(func),
        None => bail!("Failed to get function '{}'", name),
    }
}

/// Call `func` with a single string and return its `u32` result.
pub fn eval_expression(store: &mut Store<()>, func: &Func, expr: &str) -> Result<u32> {
    let params = [Val::String(expr.into())];
    let mut results = [Val::U32(0)];

    func.call(&mut *store, &params, &mut results)?;
    func.post_return(&mut *store)?;

    match &results[0] {
        Val::U32(result) => Ok(*result),
        other => bail!("Unexpected result type: {:?}", other),
    }
}

pub fn run(knobs: Knobs) -> Result<u32> {
    let engine = Engine::new(&knobs.config)?;
    let component = load_component(&engine, &knobs.wasm)?;
    let index = resolve_export(&component, &knobs.export)?;

    let (mut store, instance) = instantiate(&engine, &component)?;
    let func = lookup_func(&mut store, &instance, &index, &knobs.export.func)?;

    log::info!(
        "Calling {}#{} with {:?}",
        knobs.export.interface,
        knobs.export.func,
        knobs.expr
    );
    eval_expression(&mut store, &func, &knobs.expr)
        .with_context(|| format!("Failed to evaluate '{}'", knobs.expr))
}

//! Host harness for calculator Wasm components.
//!
//! Loads a component, resolves a function nested inside one of its exported
//! interfaces (by default `docs:calculator/calculate@0.1.0#eval-expression`),
//! calls it with a single string and returns the `u32` it produces. Every
//! import of the component is stubbed out as a trap.

pub mod cli;
pub mod engine;
pub mod invoke;

pub use cli::{CLI, Knobs};
pub use invoke::{ExportPath, run};

//! CLI command definitions and handlers.

pub mod content;
pub mod navigation;
pub mod pastoral;
pub mod settings;

use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

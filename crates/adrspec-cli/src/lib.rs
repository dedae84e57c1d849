//! Schema sink for the address-word field catalog.
//!
//! Builds the built-in [adrspec::catalog] schema, verifies that every
//! condition references a declared field, and writes the serialized JSON
//! document to disk. The destination is an explicit argument; nothing about
//! the output path is baked in.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use adrspec::catalog;
use adrspec::serde::SchemaDoc;

/// Arguments accepted by the `adrspec` binary.
#[derive(Parser, Debug)]
#[command(
    name = "adrspec",
    version,
    about = "Compile the address field catalog into a JSON schema document"
)]
pub struct Args {
    /// Path of the JSON document to write.
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Indent the document for human readers instead of emitting one line.
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Builds the catalog schema and writes it to `args.output`.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let schema = catalog::address_schema();
    schema
        .check_references()
        .context("built-in catalog is inconsistent")?;

    let doc = SchemaDoc::from(&schema);
    let json = if args.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("failed to encode schema document")?;

    fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        fields = schema.len(),
        path = %args.output.display(),
        "schema document written"
    );

    Ok(())
}

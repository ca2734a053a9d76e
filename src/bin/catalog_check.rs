//! Validate a catalog document and print an integrity report.
//!
//! Usage: catalog_check [path/to/catalog.json]
//!
//! With no argument the bundled dataset is checked. Exit code 1 means the
//! catalog failed validation; warnings alone do not fail the check.

use std::process;

use anyhow::Context;

use rwai_arena::catalog::{self, Catalog};

fn load(path: Option<String>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {path}"))?;
            Ok(Catalog::from_json(&json)?)
        }
        None => Ok(catalog::load_bundled()?),
    }
}

fn main() {
    match load(std::env::args().nth(1)) {
        Ok(catalog) => {
            let report = catalog.integrity_report();
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("report serialization failed: {err}");
                    process::exit(1);
                }
            }
            for warning in catalog.warnings() {
                eprintln!("warning: {warning}");
            }
        }
        Err(err) => {
            eprintln!("catalog check failed: {err:#}");
            process::exit(1);
        }
    }
}

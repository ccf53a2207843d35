use anyhow::{Context, Result};
use oneulunse::domain::catalog::{Category, ContentCatalog};
use std::fs;

/// Writes the built-in catalog as JSON, to the path given or to stdout.
///
/// The output is the layout `CATALOG_PATH` expects, so it can be edited and
/// loaded back. Reordering rows changes existing fortunes.
fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let catalog = ContentCatalog::default();
    let json = serde_json::to_string_pretty(&catalog)?;

    // Refuse to write anything that would not load back.
    ContentCatalog::from_json(&json).context("built-in catalog does not round-trip")?;

    for category in Category::ALL {
        tracing::info!(%category, entries = catalog.len(category), "Exporting category");
    }

    match std::env::args().nth(1) {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("failed to write {}", path))?;
            tracing::info!(path = %path, "Catalog written");
        }
        None => println!("{}", json),
    }

    Ok(())
}

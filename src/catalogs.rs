use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// A message catalog: key → message, in file insertion order.
///
/// Values are kept as raw JSON so catalogs with richer entries (for example
/// `{"message": ..., "description": ...}` objects) pass through untouched.
pub type Catalog = serde_json::Map<String, Value>;

/// Read and parse a source catalog. Fails if the file is missing, is not
/// valid JSON, or its top level is not an object.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON object of messages", path.display()))
}

/// Read a store description as-is, with no parsing.
pub fn load_description(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read store description {}", path.display()))
}

/// Partition a catalog into chunks of at most `chunk_size` entries,
/// preserving entry order within and across chunks.
///
/// An empty catalog yields exactly one empty chunk, and an exact multiple of
/// `chunk_size` yields no trailing empty chunk.
pub fn chunk_catalog(catalog: &Catalog, chunk_size: usize) -> Vec<Catalog> {
    let mut chunks = Vec::new();
    let mut current = Catalog::new();

    for (key, value) in catalog {
        if current.len() == chunk_size {
            chunks.push(std::mem::take(&mut current));
        }
        current.insert(key.clone(), value.clone());
    }

    chunks.push(current);
    chunks
}

/// Verify that a translated chunk covers exactly the source chunk's keys.
/// The model occasionally drops or invents keys; merging such a response
/// would silently corrupt the output catalog, so any difference is an error.
pub fn check_key_parity(source: &Catalog, translated: &Catalog) -> Result<()> {
    let missing: Vec<&str> = source
        .keys()
        .filter(|key| !translated.contains_key(*key))
        .map(String::as_str)
        .collect();
    let unexpected: Vec<&str> = translated
        .keys()
        .filter(|key| !source.contains_key(*key))
        .map(String::as_str)
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }

    anyhow::bail!(
        "translated keys do not match the source chunk (missing: [{}], unexpected: [{}])",
        missing.join(", "),
        unexpected.join(", ")
    )
}

/// Write a catalog pretty-printed (two-space indent), creating the locale
/// directory first. An existing file is overwritten.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write a store description verbatim, creating the locale directory first.
pub fn write_description(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

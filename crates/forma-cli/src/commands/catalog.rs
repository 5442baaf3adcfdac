//! Loading a reference catalog from disk.

use std::path::Path;

use anyhow::Context;
use forma_core::references::Catalog;

/// Load a catalog from JSON, or TOML when the extension is `.toml`.
///
/// Usernames are lowercased on load so lookups match normalized users.
pub fn load(path: &Path) -> anyhow::Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value: serde_json::Value = if is_toml {
        let table: toml::Value = toml::from_str(&text)
            .with_context(|| format!("catalog {} is not valid TOML", path.display()))?;
        serde_json::to_value(table)?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("catalog {} is not valid JSON", path.display()))?
    };

    let parsed: Catalog = serde_json::from_value(value)
        .with_context(|| format!("catalog {} has an unexpected shape", path.display()))?;

    let mut catalog = Catalog {
        ids: parsed.ids,
        ..Catalog::default()
    };
    for username in &parsed.usernames {
        catalog.insert_username(username);
    }

    tracing::debug!(
        path = %path.display(),
        ids = catalog.id_count(),
        usernames = catalog.usernames.len(),
        "loaded reference catalog"
    );
    Ok(catalog)
}

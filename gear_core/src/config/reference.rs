//! Reference table loading from a data directory

use super::{load_data, ConfigError};
use crate::catalog::{ClassCatalog, FlameCatalog, ItemCatalog, PotentialCatalog, ReferenceTables, SetCatalog};
use crate::starforce::StarForceTables;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 2] = ["toml", "json"];

/// `<dir>/<stem>.toml` or `<dir>/<stem>.json`, whichever exists first
pub fn find_data_file(dir: &Path, stem: &str) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
}

fn load_required<T: serde::de::DeserializeOwned>(dir: &Path, stem: &str) -> Result<T, ConfigError> {
    let path = find_data_file(dir, stem)
        .ok_or_else(|| ConfigError::MissingFile(dir.join(format!("{stem}.json"))))?;
    tracing::debug!(path = %path.display(), "loading reference file");
    load_data(&path)
}

fn load_optional<T: serde::de::DeserializeOwned + Default>(dir: &Path, stem: &str) -> Result<T, ConfigError> {
    match find_data_file(dir, stem) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading reference file");
            load_data(&path)
        }
        None => {
            tracing::debug!(stem, "optional reference file absent, using defaults");
            Ok(T::default())
        }
    }
}

/// Load every reference table from `dir`.
///
/// Required: `gear`, `flames`, `potential`, `set_effects`.
/// Optional: `classes` (empty when absent) and `starforce` (built-in
/// tables when absent). Each may be `.toml` or `.json`.
pub fn load_reference_tables(dir: &Path) -> Result<ReferenceTables, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::MissingFile(dir.to_path_buf()));
    }

    let items: ItemCatalog = load_required(dir, "gear")?;
    let flames: FlameCatalog = load_required(dir, "flames")?;
    let potential: PotentialCatalog = load_required(dir, "potential")?;
    let sets: SetCatalog = load_required(dir, "set_effects")?;
    let classes: ClassCatalog = load_optional(dir, "classes")?;
    let starforce: StarForceTables = load_optional(dir, "starforce")?;

    validate_unique_ids(&items)?;
    for gap in starforce.short_rows() {
        tracing::warn!(%gap, "star force row shorter than the star cap");
    }

    tracing::info!(
        items = items.len(),
        flames = flames.flame_types.len(),
        potential_lines = potential.len(),
        sets = sets.len(),
        classes = classes.classes.len(),
        "reference tables loaded"
    );

    Ok(ReferenceTables {
        items,
        flames,
        potential,
        sets,
        classes,
        starforce,
    })
}

fn validate_unique_ids(items: &ItemCatalog) -> Result<(), ConfigError> {
    let mut seen = std::collections::HashSet::new();
    for item in items.iter() {
        if !seen.insert(item.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate gear id '{}'",
                item.id
            )));
        }
    }
    Ok(())
}

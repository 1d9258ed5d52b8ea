//! Theme loading functionality

use super::factory::ThemeFactory;
use super::models::{Layer, Theme};
use super::variant::ThemeSlot;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a theme definition file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Theme name for identification
    #[serde(default)]
    pub name: String,
    /// Variables this theme defines on top of its base
    #[serde(default)]
    pub variables: Layer,
}

/// Built-in definition file of a slot
fn bundled_definition(slot: ThemeSlot) -> &'static str {
    match slot {
        ThemeSlot::Default => include_str!("../../themes/default.yml"),
        ThemeSlot::Default8px => include_str!("../../themes/default_8px.yml"),
        ThemeSlot::Dark => include_str!("../../themes/dark.yml"),
        ThemeSlot::Flat => include_str!("../../themes/flat.yml"),
        ThemeSlot::Flat8px => include_str!("../../themes/flat_8px.yml"),
    }
}

/// Parse the built-in definition of a slot
pub fn builtin_definition(slot: ThemeSlot) -> Result<ThemeDefinition> {
    let mut definition: ThemeDefinition = serde_yaml::from_str(bundled_definition(slot))?;
    if definition.name.is_empty() {
        definition.name = slot.label().to_string();
    }
    Ok(definition)
}

/// Load the definition of a slot from `theme_dir`, with fallback to the built-in one
pub fn load_definition(slot: ThemeSlot, theme_dir: Option<&Path>) -> Result<ThemeDefinition> {
    let Some(dir) = theme_dir else {
        return builtin_definition(slot);
    };
    match try_load_definition(slot, dir) {
        Ok(definition) => {
            info!("Loaded theme '{}' from {}", definition.name, dir.display());
            Ok(definition)
        }
        Err(e) => {
            warn!("Failed to load theme '{slot}': {e}. Using built-in theme.");
            builtin_definition(slot)
        }
    }
}

/// Attempt to load a definition file, returning errors for handling
fn try_load_definition(slot: ThemeSlot, theme_dir: &Path) -> Result<ThemeDefinition> {
    let theme_path = get_theme_path(slot, theme_dir)?;

    debug!("Loading theme from: {}", theme_path.display());

    let content = fs::read_to_string(&theme_path)?;
    let mut definition: ThemeDefinition = serde_yaml::from_str(&content)?;

    if definition.name.is_empty() {
        definition.name = slot.label().to_string();
    }

    Ok(definition)
}

/// Get the path to a theme file
fn get_theme_path(slot: ThemeSlot, theme_dir: &Path) -> Result<PathBuf> {
    let theme_path = theme_dir.join(format!("{}.yml", slot.file_stem()));

    if !theme_path.exists() {
        return Err(eyre!("Theme file not found: {}", theme_path.display()));
    }

    Ok(theme_path)
}

/// Build the five base themes, each slot layered on its base slot
pub fn load_base_themes(theme_dir: Option<&Path>) -> Result<BTreeMap<ThemeSlot, Theme>> {
    let mut themes: BTreeMap<ThemeSlot, Theme> = BTreeMap::new();
    for slot in enum_iterator::all::<ThemeSlot>() {
        let definition = load_definition(slot, theme_dir)?;
        let theme = match slot.base() {
            None => ThemeFactory::create(definition.name, definition.variables),
            Some(base_slot) => {
                let base = themes
                    .get(&base_slot)
                    .ok_or_else(|| eyre!("Base theme '{base_slot}' of '{slot}' is not loaded"))?;
                ThemeFactory::create_with_base(definition.name, definition.variables, base)
            }
        };
        debug!("Theme '{}' ready for slot {slot}", theme.name());
        themes.insert(slot, theme);
    }
    Ok(themes)
}

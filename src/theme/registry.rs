//! The five theme variants and the selection between them

use color_eyre::eyre::eyre;
use color_eyre::Result;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use super::loader::load_base_themes;
use super::models::Theme;
use super::variant::{Density, ThemeFamily, ThemeSlot};

/// Exactly one theme per slot. Entries are swapped for new themes, never
/// modified, so a theme handed out by [`ThemeRegistry::select`] stays valid.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    default: Arc<Theme>,
    default_8px: Arc<Theme>,
    dark: Arc<Theme>,
    flat: Arc<Theme>,
    flat_8px: Arc<Theme>,
}

impl ThemeRegistry {
    /// Registry of the built-in themes
    pub fn builtin() -> Result<Self> {
        Self::load(None)
    }

    /// Registry of the built-in themes, with per-slot override files from `theme_dir`
    pub fn load(theme_dir: Option<&Path>) -> Result<Self> {
        let mut themes = load_base_themes(theme_dir)?;
        let mut take = |slot: ThemeSlot| {
            themes
                .remove(&slot)
                .map(Arc::new)
                .ok_or_else(|| eyre!("No theme loaded for slot {slot}"))
        };
        Ok(Self {
            default: take(ThemeSlot::Default)?,
            default_8px: take(ThemeSlot::Default8px)?,
            dark: take(ThemeSlot::Dark)?,
            flat: take(ThemeSlot::Flat)?,
            flat_8px: take(ThemeSlot::Flat8px)?,
        })
    }

    pub fn get(&self, slot: ThemeSlot) -> &Arc<Theme> {
        match slot {
            ThemeSlot::Default => &self.default,
            ThemeSlot::Default8px => &self.default_8px,
            ThemeSlot::Dark => &self.dark,
            ThemeSlot::Flat => &self.flat,
            ThemeSlot::Flat8px => &self.flat_8px,
        }
    }

    /// Returns a registry where `slot` holds `theme` and every other slot is shared with `self`
    pub fn with_theme(&self, slot: ThemeSlot, theme: Arc<Theme>) -> Self {
        let mut next = self.clone();
        match slot {
            ThemeSlot::Default => next.default = theme,
            ThemeSlot::Default8px => next.default_8px = theme,
            ThemeSlot::Dark => next.dark = theme,
            ThemeSlot::Flat => next.flat = theme,
            ThemeSlot::Flat8px => next.flat_8px = theme,
        }
        next
    }

    /// Theme shown for a family and density. Dark ignores density.
    pub fn select(&self, family: ThemeFamily, density: Density) -> Arc<Theme> {
        Arc::clone(self.get(ThemeSlot::for_selection(family, density)))
    }

    /// Like [`ThemeRegistry::select`] with the family given by name. Unknown names
    /// select the default theme so there is always something to preview.
    pub fn select_by_name(&self, family: &str, density: Density) -> Arc<Theme> {
        match family.parse::<ThemeFamily>() {
            Ok(family) => self.select(family, density),
            Err(e) => {
                debug!("{e}, selecting the default theme");
                self.select(ThemeFamily::Default, Density::Normal)
            }
        }
    }
}

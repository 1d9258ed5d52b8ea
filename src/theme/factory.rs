//! Building finished themes out of definition layers

use log::{trace, warn};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::models::{Definition, DerivationError, Layer, Theme};

/// Turns raw layers into [`Theme`]s, resolving derived variables.
pub struct ThemeFactory;

impl ThemeFactory {
    /// Build a theme out of a single layer
    pub fn create(name: impl Into<String>, layer: Layer) -> Theme {
        Self::from_layers(name.into(), vec![Arc::new(layer)])
    }

    /// Build a theme whose `overrides` sit on top of every layer of `base`.
    /// Variables the overrides don't define fall back to `base`, and derived
    /// variables of `base` see the overridden values.
    pub fn create_with_base(name: impl Into<String>, overrides: Layer, base: &Theme) -> Theme {
        let mut layers = base.layers().to_vec();
        layers.push(Arc::new(overrides));
        Self::from_layers(name.into(), layers)
    }

    fn from_layers(name: String, layers: Vec<Arc<Layer>>) -> Theme {
        let unresolved = Theme::from_parts(name, layers, BTreeMap::new());
        let mut resolver = Resolver {
            theme: &unresolved,
            resolved: BTreeMap::new(),
            in_progress: HashSet::new(),
        };
        for key in unresolved.keys() {
            if let Err(e) = resolver.resolve(&key) {
                warn!("Theme '{}': {e}, leaving it unset", unresolved.name());
            }
        }
        let resolved = resolver.resolved;
        trace!(
            "Built theme '{}' with {} variables over {} layers",
            unresolved.name(),
            resolved.len(),
            unresolved.layers().len()
        );
        unresolved.with_resolved(resolved)
    }
}

struct Resolver<'a> {
    theme: &'a Theme,
    resolved: BTreeMap<String, String>,
    in_progress: HashSet<String>,
}

impl Resolver<'_> {
    fn resolve(&mut self, key: &str) -> Result<String, DerivationError> {
        if let Some(value) = self.resolved.get(key) {
            return Ok(value.clone());
        }
        let theme = self.theme;
        let value = match theme.definition(key) {
            Some(Definition::Stored(value)) => value.clone(),
            Some(Definition::Derived(derivation)) => {
                if !self.in_progress.insert(key.to_string()) {
                    return Err(DerivationError::Cycle(key.to_string()));
                }
                let from = derivation.source();
                let source_value = match theme.definition(from) {
                    Some(_) => self.resolve(from),
                    None => Err(DerivationError::UnknownSource {
                        key: key.to_string(),
                        from: from.to_string(),
                    }),
                };
                self.in_progress.remove(key);
                derivation.apply(key, &source_value?)?
            }
            None => {
                return Err(DerivationError::UnknownSource {
                    key: key.to_string(),
                    from: key.to_string(),
                })
            }
        };
        self.resolved.insert(key.to_string(), value.clone());
        Ok(value)
    }
}

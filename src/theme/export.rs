//! Debug export of the variables a theme overrides

use std::collections::BTreeMap;

use super::models::{Definition, Theme};

/// Stored variables of `current` whose value differs from `default`.
///
/// Derived variables are left out: they follow their source, which is exported
/// when it was changed. Variables `default` leaves undefined or empty are never exported.
pub fn export_overrides(current: &Theme, default: &Theme) -> BTreeMap<String, String> {
    current
        .keys()
        .into_iter()
        .filter(|key| matches!(current.definition(key), Some(Definition::Stored(_))))
        .filter_map(|key| {
            let value = current.get(&key)?;
            default
                .get(&key)
                .is_some_and(|d| !d.is_empty() && d != value)
                .then(|| (key, value.to_string()))
        })
        .collect()
}

/// [`export_overrides`] as a flat JSON object
pub fn export_json(current: &Theme, default: &Theme) -> serde_json::Result<String> {
    serde_json::to_string(&export_overrides(current, default))
}

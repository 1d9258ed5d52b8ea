// playground/errors.rs

//! Validation errors of the editor panel, per theme slot.

use std::collections::BTreeMap;

use crate::theme::ThemeSlot;

/// Per-slot table of variables whose last edit was rejected
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorTable {
    by_slot: BTreeMap<ThemeSlot, BTreeMap<String, bool>>,
}

impl ErrorTable {
    pub fn is_invalid(&self, slot: ThemeSlot, variable: &str) -> bool {
        self.by_slot
            .get(&slot)
            .and_then(|errors| errors.get(variable))
            .copied()
            .unwrap_or(false)
    }

    /// Returns a table where only the (`slot`, `variable`) flag changed
    pub fn with_flag(&self, slot: ThemeSlot, variable: &str, invalid: bool) -> Self {
        let mut next = self.clone();
        next.by_slot
            .entry(slot)
            .or_default()
            .insert(variable.to_string(), invalid);
        next
    }

    /// Variables of `slot` currently flagged invalid
    pub fn invalid_variables(&self, slot: ThemeSlot) -> impl Iterator<Item = &str> {
        self.by_slot
            .get(&slot)
            .into_iter()
            .flatten()
            .filter(|(_, invalid)| **invalid)
            .map(|(variable, _)| variable.as_str())
    }
}

//! Theme data models

use itertools::Itertools;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::color::parse_color;

/// One set of variable definitions. Themes stack several layers.
pub type Layer = BTreeMap<String, Definition>;

/// How a theme variable gets its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    /// A literal value such as `#1d85d0` or `32px`
    Stored(String),
    /// A value computed from another variable of the same theme
    Derived(Derivation),
}

impl Definition {
    pub fn stored(value: impl Into<String>) -> Self {
        Definition::Stored(value.into())
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Definition::Derived(_))
    }
}

/// Fixed table of derivation functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "derive", rename_all = "snake_case")]
pub enum Derivation {
    /// Same value as `from`
    Alias { from: String },
    /// `from` with its HSL lightness raised by `amount`
    Lighten { from: String, amount: f32 },
    /// `from` with its HSL lightness lowered by `amount`
    Darken { from: String, amount: f32 },
    /// `from` with its alpha channel replaced by `alpha`
    Fade { from: String, alpha: f32 },
    /// A `px` length multiplied by `factor`
    Scale { from: String, factor: f32 },
}

/// Error raised while resolving derived variables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DerivationError {
    #[error("variable '{key}' derives from unknown variable '{from}'")]
    UnknownSource { key: String, from: String },
    #[error("variable '{0}' is part of a derivation cycle")]
    Cycle(String),
    #[error("variable '{key}' needs a color but '{from}' is '{value}'")]
    NotAColor {
        key: String,
        from: String,
        value: String,
    },
    #[error("variable '{key}' needs a px length but '{from}' is '{value}'")]
    NotALength {
        key: String,
        from: String,
        value: String,
    },
}

impl Derivation {
    /// Name of the variable this derivation reads
    pub fn source(&self) -> &str {
        match self {
            Derivation::Alias { from }
            | Derivation::Lighten { from, .. }
            | Derivation::Darken { from, .. }
            | Derivation::Fade { from, .. }
            | Derivation::Scale { from, .. } => from.as_str(),
        }
    }

    /// Compute the value of `key` given the resolved value of the source variable
    pub fn apply(&self, key: &str, source_value: &str) -> Result<String, DerivationError> {
        let not_a_color = || DerivationError::NotAColor {
            key: key.to_string(),
            from: self.source().to_string(),
            value: source_value.to_string(),
        };
        match self {
            Derivation::Alias { .. } => Ok(source_value.to_string()),
            Derivation::Lighten { amount, .. } => parse_color(source_value)
                .map(|c| c.lighten(*amount).to_string())
                .map_err(|_| not_a_color()),
            Derivation::Darken { amount, .. } => parse_color(source_value)
                .map(|c| c.darken(*amount).to_string())
                .map_err(|_| not_a_color()),
            Derivation::Fade { alpha, .. } => parse_color(source_value)
                .map(|c| c.fade(*alpha).to_string())
                .map_err(|_| not_a_color()),
            Derivation::Scale { factor, .. } => {
                let px = source_value
                    .trim()
                    .strip_suffix("px")
                    .and_then(|n| n.trim().parse::<f32>().ok())
                    .ok_or_else(|| DerivationError::NotALength {
                        key: key.to_string(),
                        from: self.source().to_string(),
                        value: source_value.to_string(),
                    })?;
                Ok(format!("{}px", px * factor))
            }
        }
    }
}

/// A theme: stacked definition layers plus the resolved value of every variable.
///
/// Themes are only built by [`super::factory::ThemeFactory`] and never change
/// once built; editing produces a new theme.
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    /// Oldest layer first
    layers: Vec<Arc<Layer>>,
    resolved: BTreeMap<String, String>,
}

impl Theme {
    pub(crate) fn from_parts(
        name: String,
        layers: Vec<Arc<Layer>>,
        resolved: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name,
            layers,
            resolved,
        }
    }

    pub(crate) fn with_resolved(self, resolved: BTreeMap<String, String>) -> Self {
        Self { resolved, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved value of a variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.resolved.get(key).map(String::as_str)
    }

    /// Resolved value as a terminal color, for preview widgets
    pub fn color(&self, key: &str) -> Option<Color> {
        self.get(key)
            .and_then(|value| parse_color(value).ok())
            .map(Color::from)
    }

    /// Every variable defined in any layer, sorted
    pub fn keys(&self) -> Vec<String> {
        self.layers
            .iter()
            .flat_map(|layer| layer.keys())
            .sorted()
            .dedup()
            .cloned()
            .collect()
    }

    /// The definition of `key` in the most recent layer defining it
    pub fn definition(&self, key: &str) -> Option<&Definition> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    pub fn layers(&self) -> &[Arc<Layer>] {
        &self.layers
    }

    /// Resolved `(key, value)` pairs in key order
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolved
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

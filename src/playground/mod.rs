// playground/mod.rs

//! State of the theme playground: which theme the live preview shows, the
//! editor panel, and validated edits of theme variables.

pub mod actions;
pub mod editor;
pub mod errors;
pub mod gate;
pub mod state;

pub use actions::Action;
pub use editor::{search_editable_slots, search_variables, EditorRow};
pub use gate::{EditStatus, ValidationGate, Verdict};
pub use state::PlaygroundState;

use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::theme::variant::UnknownVariant;
use crate::theme::ThemeSlot;

#[derive(Debug, thiserror::Error)]
pub enum ScriptedEditError {
    #[error("Expected SLOT:VARIABLE=VALUE, got '{0}'")]
    Malformed(String),
    #[error(transparent)]
    Slot(#[from] UnknownVariant),
}

/// An edit applied outside of user interaction, from the config file or the command line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEdit {
    pub slot: ThemeSlot,
    pub variable: String,
    pub value: String,
}

impl FromStr for ScriptedEdit {
    type Err = ScriptedEditError;

    /// Parses `SLOT:VARIABLE=VALUE`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScriptedEditError::Malformed(s.to_string());
        let (target, value) = s.split_once('=').ok_or_else(malformed)?;
        let (slot, variable) = target.split_once(':').ok_or_else(malformed)?;
        Ok(Self {
            slot: slot.parse()?,
            variable: variable.trim().to_string(),
            value: value.to_string(),
        })
    }
}

impl Display for ScriptedEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}={}", self.slot, self.variable, self.value)
    }
}

/// Replay `edits` through the editor panel, restoring the panel afterwards
pub fn apply_edits(state: PlaygroundState, edits: &[ScriptedEdit]) -> PlaygroundState {
    if edits.is_empty() {
        return state;
    }
    let editing = state.editing_slot();
    let mut state = state.reduce(Action::OpenEditor);
    for edit in edits {
        state = state
            .reduce(Action::SwitchEditingSlot(edit.slot))
            .reduce(Action::EditVariable {
                variable: edit.variable.clone(),
                value: edit.value.clone(),
            });
        if state.last_edit() == EditStatus::Rejected {
            warn!("Edit {edit} rejected");
        }
    }
    match editing {
        Some(slot) => state.reduce(Action::SwitchEditingSlot(slot)),
        None => state.reduce(Action::CloseEditor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    #[test]
    fn should_parse_scripted_edit() {
        let edit: ScriptedEdit = "flat_8px:brandColor=#ff0000".parse().unwrap();
        assert_eq!(edit.slot, ThemeSlot::Flat8px);
        assert_eq!(edit.variable, "brandColor");
        assert_eq!(edit.value, "#ff0000");
        assert_eq!(edit.to_string(), "flat_8px:brandColor=#ff0000");

        let font: ScriptedEdit = "dark:fontFamily=Arial, sans-serif".parse().unwrap();
        assert_eq!(font.value, "Arial, sans-serif");
    }

    #[test]
    fn should_reject_malformed_scripted_edit() {
        assert!("brandColor=#fff".parse::<ScriptedEdit>().is_err());
        assert!("flat:brandColor".parse::<ScriptedEdit>().is_err());
        assert!("neon:brandColor=#fff".parse::<ScriptedEdit>().is_err());
    }

    #[test]
    fn should_apply_edits_and_close_editor() {
        let state = PlaygroundState::new(ThemeRegistry::builtin().unwrap());
        let edits = vec![
            "default:brandColor=#000000".parse().unwrap(),
            "dark:bgDefault=bad".parse().unwrap(),
        ];
        let state = apply_edits(state, &edits);
        assert!(!state.is_editor_open());
        assert_eq!(state.current_theme().get("brandColor"), Some("#000000"));
        assert!(state.errors().is_invalid(ThemeSlot::Dark, "bgDefault"));
    }
}

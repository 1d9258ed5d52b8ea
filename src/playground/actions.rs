// playground/actions.rs

//! Actions the user can trigger on the playground.

use std::fmt::{self, Display};

use crate::theme::{Density, ThemeFamily, ThemeSlot};

/// All possible user actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Preview another theme family
    SwitchFamily(ThemeFamily),
    /// Preview the given density
    SetDensity(Density),
    ToggleDensity,
    /// Open the editor panel on the previewed theme
    OpenEditor,
    CloseEditor,
    /// Edit another theme in the open editor panel, ignored when the panel is closed
    SwitchEditingSlot(ThemeSlot),
    /// Submit a new value for a variable of the edited theme
    EditVariable { variable: String, value: String },
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SwitchFamily(family) => write!(f, "Switch to {family} theme"),
            Action::SetDensity(Density::Dense) => write!(f, "Use 8px grid"),
            Action::SetDensity(Density::Normal) => write!(f, "Use normal grid"),
            Action::ToggleDensity => write!(f, "Toggle 8px grid"),
            Action::OpenEditor => write!(f, "Open theme editor"),
            Action::CloseEditor => write!(f, "Close theme editor"),
            Action::SwitchEditingSlot(slot) => write!(f, "Edit {} theme", slot.label()),
            Action::EditVariable { variable, value } => write!(f, "Set {variable} to '{value}'"),
        }
    }
}

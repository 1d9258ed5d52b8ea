// playground/state.rs

use log::*;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::actions::Action;
use super::editor::{editor_rows, EditorRow};
use super::errors::ErrorTable;
use super::gate::{EditStatus, ValidationGate, Verdict};
use crate::theme::export::{export_json, export_overrides};
use crate::theme::{patch, Density, Theme, ThemeFamily, ThemeRegistry, ThemeSlot};

/// Complete playground state. Every change goes through [`PlaygroundState::reduce`],
/// which consumes the state and returns the next one.
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    family: ThemeFamily,
    density: Density,
    /// Theme shown by the live preview
    current_theme: Arc<Theme>,
    themes: ThemeRegistry,
    errors: ErrorTable,
    /// Slot edited by the open editor panel, `None` when closed
    editing: Option<ThemeSlot>,
    last_edit: EditStatus,
    /// Default theme as loaded, reference for the debug export
    pristine_default: Arc<Theme>,
}

impl PlaygroundState {
    /// Preview the default theme at normal density, editor closed
    pub fn new(themes: ThemeRegistry) -> Self {
        let current_theme = themes.select(ThemeFamily::Default, Density::Normal);
        let pristine_default = Arc::clone(themes.get(ThemeSlot::Default));
        Self {
            family: ThemeFamily::Default,
            density: Density::Normal,
            current_theme,
            themes,
            errors: ErrorTable::default(),
            editing: None,
            last_edit: EditStatus::Clean,
            pristine_default,
        }
    }

    pub fn family(&self) -> ThemeFamily {
        self.family
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn current_theme(&self) -> &Arc<Theme> {
        &self.current_theme
    }

    /// Slot of the theme shown by the preview
    pub fn current_slot(&self) -> ThemeSlot {
        ThemeSlot::for_selection(self.family, self.density)
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn errors(&self) -> &ErrorTable {
        &self.errors
    }

    pub fn editing_slot(&self) -> Option<ThemeSlot> {
        self.editing
    }

    pub fn is_editor_open(&self) -> bool {
        self.editing.is_some()
    }

    pub fn last_edit(&self) -> EditStatus {
        self.last_edit
    }

    /// Rows of the editor panel, `None` when the panel is closed
    pub fn editor_rows(&self) -> Option<Vec<EditorRow>> {
        self.editing
            .map(|slot| editor_rows(self.themes.get(slot), slot, &self.errors))
    }

    /// Variables of the previewed theme that differ from the default theme
    pub fn export_current(&self) -> BTreeMap<String, String> {
        export_overrides(&self.current_theme, &self.pristine_default)
    }

    /// [`PlaygroundState::export_current`] as JSON
    pub fn export_current_json(&self) -> serde_json::Result<String> {
        export_json(&self.current_theme, &self.pristine_default)
    }

    /// Apply a user action
    pub fn reduce(self, action: Action) -> Self {
        debug!("Run action [{}]", action);
        match action {
            Action::SwitchFamily(family) => {
                let density = self.density;
                self.select(family, density)
            }
            Action::SetDensity(density) => {
                let family = self.family;
                self.select(family, density)
            }
            Action::ToggleDensity => {
                let (family, density) = (self.family, self.density.toggle());
                self.select(family, density)
            }
            Action::OpenEditor => {
                let slot = self.current_slot();
                trace!("Editor opened on {slot}");
                Self {
                    editing: Some(slot),
                    last_edit: EditStatus::Clean,
                    ..self
                }
            }
            Action::CloseEditor => Self {
                editing: None,
                ..self
            },
            Action::SwitchEditingSlot(slot) => {
                if !self.is_editor_open() {
                    warn!("Cannot edit {slot} theme, the theme editor is closed");
                    return self;
                }
                Self {
                    editing: Some(slot),
                    last_edit: EditStatus::Clean,
                    ..self
                }
            }
            Action::EditVariable { variable, value } => self.edit_variable(&variable, &value),
        }
    }

    fn select(self, family: ThemeFamily, density: Density) -> Self {
        let current_theme = self.themes.select(family, density);
        Self {
            family,
            density,
            current_theme,
            ..self
        }
    }

    fn edit_variable(self, variable: &str, value: &str) -> Self {
        let Some(slot) = self.editing else {
            warn!("Cannot set {variable}, the theme editor is closed");
            return self;
        };
        let theme = self.themes.get(slot);
        let verdict = ValidationGate::check(theme, variable, value);
        let errors = self
            .errors
            .with_flag(slot, variable, verdict == Verdict::Rejected);

        match verdict {
            Verdict::Rejected => {
                info!("Rejected '{value}' for {variable} in {slot} theme: not a color");
                Self {
                    errors,
                    last_edit: EditStatus::Rejected,
                    ..self
                }
            }
            Verdict::Accepted => {
                let patched = Arc::new(patch(theme, variable, value));
                let themes = self.themes.with_theme(slot, Arc::clone(&patched));
                let current_theme = if slot == self.current_slot() {
                    trace!("Edited theme is previewed, refreshing preview");
                    patched
                } else {
                    self.current_theme
                };
                Self {
                    current_theme,
                    themes,
                    errors,
                    last_edit: EditStatus::Accepted,
                    ..self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PlaygroundState {
        PlaygroundState::new(ThemeRegistry::builtin().unwrap())
    }

    fn edit(variable: &str, value: &str) -> Action {
        Action::EditVariable {
            variable: variable.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn should_start_on_default_theme() {
        let state = state();
        assert_eq!(state.current_slot(), ThemeSlot::Default);
        assert!(Arc::ptr_eq(
            state.current_theme(),
            state.themes().get(ThemeSlot::Default)
        ));
        assert!(!state.is_editor_open());
        assert_eq!(state.editor_rows(), None);
    }

    #[test]
    fn should_follow_family_and_density() {
        let state = state()
            .reduce(Action::SwitchFamily(ThemeFamily::Flat))
            .reduce(Action::ToggleDensity);
        assert_eq!(state.current_slot(), ThemeSlot::Flat8px);
        assert!(Arc::ptr_eq(
            state.current_theme(),
            state.themes().get(ThemeSlot::Flat8px)
        ));

        let state = state.reduce(Action::SwitchFamily(ThemeFamily::Dark));
        assert!(Arc::ptr_eq(
            state.current_theme(),
            state.themes().get(ThemeSlot::Dark)
        ));
        // density is remembered for the next family
        let state = state.reduce(Action::SwitchFamily(ThemeFamily::Default));
        assert_eq!(state.current_slot(), ThemeSlot::Default8px);

        let state = state.reduce(Action::SetDensity(Density::Normal));
        assert_eq!(state.current_slot(), ThemeSlot::Default);
    }

    #[test]
    fn should_open_editor_on_previewed_slot() {
        let state = state()
            .reduce(Action::SwitchFamily(ThemeFamily::Flat))
            .reduce(Action::OpenEditor);
        assert_eq!(state.editing_slot(), Some(ThemeSlot::Flat));

        let state = state.reduce(Action::SwitchEditingSlot(ThemeSlot::Dark));
        assert_eq!(state.editing_slot(), Some(ThemeSlot::Dark));

        let state = state.reduce(Action::CloseEditor);
        assert!(!state.is_editor_open());
    }

    #[test]
    fn switching_edited_slot_needs_open_editor() {
        let state = state().reduce(Action::SwitchEditingSlot(ThemeSlot::Dark));
        assert!(!state.is_editor_open());
        assert_eq!(state.editor_rows(), None);

        let state = state.reduce(edit("bgDefault", "#000000"));
        assert_eq!(
            state.themes().get(ThemeSlot::Dark).get("bgDefault"),
            Some("#2b2b2b")
        );
    }

    #[test]
    fn edit_with_closed_editor_is_ignored() {
        let before = state();
        let default_theme = Arc::clone(before.current_theme());
        let after = before.reduce(edit("brandColor", "#000000"));
        assert!(Arc::ptr_eq(after.current_theme(), &default_theme));
        assert_eq!(after.last_edit(), EditStatus::Clean);
    }

    #[test]
    fn rejected_edit_sets_error_and_keeps_theme() {
        let state = state().reduce(Action::OpenEditor);
        let theme_before = Arc::clone(state.themes().get(ThemeSlot::Default));

        let state = state.reduce(edit("brandColor", "notacolor"));
        assert_eq!(state.last_edit(), EditStatus::Rejected);
        assert!(state.errors().is_invalid(ThemeSlot::Default, "brandColor"));
        assert!(Arc::ptr_eq(
            state.themes().get(ThemeSlot::Default),
            &theme_before
        ));
        assert!(Arc::ptr_eq(state.current_theme(), &theme_before));

        let row = state
            .editor_rows()
            .unwrap()
            .into_iter()
            .find(|row| row.key == "brandColor")
            .unwrap();
        assert!(row.invalid);
        assert_eq!(row.value.as_deref(), Some("#1d85d0"));
    }

    #[test]
    fn accepted_edit_clears_error_and_updates_preview() {
        let state = state()
            .reduce(Action::OpenEditor)
            .reduce(edit("brandColor", "notacolor"))
            .reduce(edit("brandColor", "#00FF00"));
        assert_eq!(state.last_edit(), EditStatus::Accepted);
        assert!(!state.errors().is_invalid(ThemeSlot::Default, "brandColor"));
        assert_eq!(
            state.themes().get(ThemeSlot::Default).get("brandColor"),
            Some("#00FF00")
        );
        assert!(Arc::ptr_eq(
            state.current_theme(),
            state.themes().get(ThemeSlot::Default)
        ));
    }

    #[test]
    fn editing_other_slot_leaves_preview_alone() {
        let state = state().reduce(Action::OpenEditor);
        let previewed = Arc::clone(state.current_theme());

        let state = state
            .reduce(Action::SwitchEditingSlot(ThemeSlot::Flat))
            .reduce(edit("borderWidth", "notacolor"));
        assert_eq!(state.last_edit(), EditStatus::Accepted);
        assert_eq!(
            state.themes().get(ThemeSlot::Flat).get("borderWidth"),
            Some("notacolor")
        );
        assert!(Arc::ptr_eq(state.current_theme(), &previewed));
        // the edit shows once the family is previewed
        let state = state.reduce(Action::SwitchFamily(ThemeFamily::Flat));
        assert_eq!(state.current_theme().get("borderWidth"), Some("notacolor"));
        assert_eq!(
            state.themes().get(ThemeSlot::Flat8px).get("borderWidth"),
            Some("1px")
        );
    }

    #[test]
    fn errors_are_kept_per_slot() {
        let state = state()
            .reduce(Action::OpenEditor)
            .reduce(edit("bgDefault", "nope"))
            .reduce(Action::SwitchEditingSlot(ThemeSlot::Dark));
        assert!(state.errors().is_invalid(ThemeSlot::Default, "bgDefault"));
        assert!(!state.errors().is_invalid(ThemeSlot::Dark, "bgDefault"));
        assert!(state.editor_rows().unwrap().iter().all(|row| !row.invalid));
    }

    #[test]
    fn export_reflects_edits_of_previewed_theme() {
        let state = state();
        assert!(state.export_current().is_empty());

        let state = state
            .reduce(Action::OpenEditor)
            .reduce(edit("brandColor", "#ff0000"));
        let exported = state.export_current();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported["brandColor"], "#ff0000");
        assert_eq!(
            state.export_current_json().unwrap(),
            r##"{"brandColor":"#ff0000"}"##
        );
    }
}

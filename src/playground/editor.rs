//! Items shown by the editor panel: the slot picker entries and the editable
//! variable rows.

use crate::theme::{Theme, ThemeSlot};

use super::errors::ErrorTable;

/// Something a search box can match a query against
pub trait Labelled {
    fn label(&self) -> &str;
}

/// A theme variable exposed for editing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditableVariable {
    pub key: &'static str,
    pub label: &'static str,
}

impl Labelled for EditableVariable {
    fn label(&self) -> &str {
        self.label
    }
}

/// Entry of the slot picker
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditableSlot {
    pub slot: ThemeSlot,
    pub label: &'static str,
}

impl Labelled for EditableSlot {
    fn label(&self) -> &str {
        self.label
    }
}

/// Slot picker entries, in picker order
pub const EDITABLE_SLOTS: [EditableSlot; 5] = [
    EditableSlot {
        slot: ThemeSlot::Default,
        label: "Default",
    },
    EditableSlot {
        slot: ThemeSlot::Default8px,
        label: "Default 8px",
    },
    EditableSlot {
        slot: ThemeSlot::Flat,
        label: "Flat",
    },
    EditableSlot {
        slot: ThemeSlot::Flat8px,
        label: "Flat 8px",
    },
    EditableSlot {
        slot: ThemeSlot::Dark,
        label: "Dark",
    },
];

const fn variable(key: &'static str, label: &'static str) -> EditableVariable {
    EditableVariable { key, label }
}

pub const EDITABLE_VARIABLES: &[EditableVariable] = &[
    variable("brandColor", "Brand color"),
    variable("errorMain", "Error color"),
    variable("warningMain", "Warning color"),
    variable("textColorDefault", "Text color"),
    variable("textColorInvert", "Inverted text color"),
    variable("textColorDisabled", "Disabled text color"),
    variable("bgDefault", "Background"),
    variable("bgDisabled", "Disabled background"),
    variable("linkColor", "Link color"),
    variable("linkHoverColor", "Link hover color"),
    variable("linkActiveColor", "Link active color"),
    variable("btnPrimaryBg", "Primary button background"),
    variable("btnPrimaryHoverBg", "Primary button hover background"),
    variable("btnPrimaryDisabledBg", "Primary button disabled background"),
    variable("borderColorGrayLight", "Light border color"),
    variable("borderColorFocus", "Focus border color"),
    variable("borderColorError", "Error border color"),
    variable("borderWidth", "Border width"),
    variable("controlBorderRadius", "Control border radius"),
    variable("controlHeight", "Control height"),
    variable("controlHeightLarge", "Large control height"),
    variable("controlPaddingY", "Control vertical padding"),
    variable("fontSizeSmall", "Small font size"),
    variable("fontSizeMedium", "Medium font size"),
    variable("fontFamily", "Font family"),
];

/// Items whose label contains `query`, ignoring case. Resolves immediately;
/// it is async to match search widgets that may query remote sources.
pub async fn search<T: Labelled + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.label().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub async fn search_editable_slots(query: &str) -> Vec<EditableSlot> {
    search(&EDITABLE_SLOTS, query).await
}

pub async fn search_variables(query: &str) -> Vec<EditableVariable> {
    search(EDITABLE_VARIABLES, query).await
}

/// One line of the editor panel
#[derive(Clone, Debug, PartialEq)]
pub struct EditorRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<String>,
    pub invalid: bool,
}

/// Rows for every editable variable of `theme`, the theme held by `slot`
pub fn editor_rows(theme: &Theme, slot: ThemeSlot, errors: &ErrorTable) -> Vec<EditorRow> {
    EDITABLE_VARIABLES
        .iter()
        .map(|variable| EditorRow {
            key: variable.key,
            label: variable.label,
            value: theme.get(variable.key).map(str::to_string),
            invalid: errors.is_invalid(slot, variable.key),
        })
        .collect()
}

//! Overriding a single theme variable

use log::{trace, warn};

use super::factory::ThemeFactory;
use super::models::{Definition, Layer, Theme};

/// Returns a new theme identical to `theme` except that `variable` holds the
/// literal `value`.
///
/// Every variable's definition is copied from the most recent layer defining
/// it into one fresh layer, so other derived variables stay derived and are
/// re-resolved against the new value. The patched variable always becomes a
/// stored value, even if it was derived before. `theme` itself is untouched.
///
/// A `variable` the theme does not define is not added.
pub fn patch(theme: &Theme, variable: &str, value: &str) -> Theme {
    let mut layer = Layer::new();
    let mut found = false;
    for key in theme.keys() {
        if key == variable {
            found = true;
            layer.insert(key, Definition::stored(value));
            continue;
        }
        match theme.definition(&key) {
            Some(definition) => {
                layer.insert(key, definition.clone());
            }
            // keys() and definition() walk the same layers
            None => warn!("No definition for '{key}' in theme '{}', dropping it", theme.name()),
        }
    }
    if found {
        trace!("Patched '{variable}' = '{value}' in theme '{}'", theme.name());
    } else {
        warn!(
            "Theme '{}' has no variable '{variable}', nothing patched",
            theme.name()
        );
    }
    ThemeFactory::create(theme.name(), layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::loader::load_base_themes;
    use crate::theme::variant::ThemeSlot;

    fn default_theme() -> Theme {
        load_base_themes(None).unwrap().remove(&ThemeSlot::Default).unwrap()
    }

    #[test]
    fn should_keep_untouched_variables() {
        let theme = default_theme();
        let patched = patch(&theme, "borderWidth", "2px");
        for key in theme.keys().iter().filter(|k| *k != "borderWidth") {
            assert_eq!(patched.get(key), theme.get(key), "{key} changed");
            assert_eq!(patched.definition(key), theme.definition(key));
        }
        assert_eq!(patched.get("borderWidth"), Some("2px"));
    }

    #[test]
    fn should_turn_derived_variable_into_stored_value() {
        let theme = default_theme();
        assert!(theme.definition("linkColor").unwrap().is_derived());

        let patched = patch(&theme, "linkColor", "#ff0000");
        assert_eq!(patched.get("linkColor"), Some("#ff0000"));
        assert_eq!(patched.definition("linkColor"), Some(&Definition::stored("#ff0000")));

        // the source no longer drives it
        let repatched = patch(&patched, "brandColor", "#00ff00");
        assert_eq!(repatched.get("linkColor"), Some("#ff0000"));

        let again = patch(&repatched, "linkColor", "#0000ff");
        assert_eq!(again.get("linkColor"), Some("#0000ff"));
    }

    #[test]
    fn should_recompute_dependents_of_patched_variable() {
        let theme = default_theme();
        let patched = patch(&theme, "brandColor", "#ff0000");
        assert_eq!(patched.get("linkColor"), Some("#ff0000"));
        assert_eq!(patched.get("btnPrimaryBg"), Some("#ff0000"));
        assert_ne!(patched.get("linkHoverColor"), theme.get("linkHoverColor"));
    }

    #[test]
    fn should_not_mutate_input_theme() {
        let theme = default_theme();
        let before: Vec<(String, String)> = theme
            .values()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let _ = patch(&theme, "brandColor", "#000000");
        let after: Vec<(String, String)> = theme
            .values()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn should_ignore_unknown_variable() {
        let theme = default_theme();
        let patched = patch(&theme, "doesNotExist", "#000000");
        assert_eq!(patched.get("doesNotExist"), None);
        assert_eq!(patched.keys(), theme.keys());
    }

    #[test]
    fn should_flatten_layers() {
        let themes = load_base_themes(None).unwrap();
        let flat_8px = &themes[&ThemeSlot::Flat8px];
        let patched = patch(flat_8px, "borderWidth", "3px");
        assert_eq!(patched.layers().len(), 1);
        assert_eq!(patched.name(), flat_8px.name());
        assert_eq!(patched.get("controlBorderRadius"), Some("0"));
        assert_eq!(patched.get("controlHeight"), Some("32px"));
    }
}

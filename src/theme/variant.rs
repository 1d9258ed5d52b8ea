//! Theme families, densities and the five registry slots they map to

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Named visual style, independent of density
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFamily {
    #[default]
    Default,
    Dark,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for ThemeFamily {
    type Err = UnknownVariant;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ThemeFamily::Default),
            "dark" => Ok(ThemeFamily::Dark),
            "flat" => Ok(ThemeFamily::Flat),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl Display for ThemeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            ThemeFamily::Default => "default",
            ThemeFamily::Dark => "dark",
            ThemeFamily::Flat => "flat",
        };
        write!(f, "{}", str)
    }
}

/// Layout scale: the regular grid or the compact 8px one
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Normal,
    Dense,
}

impl Density {
    pub fn from_8px(is_8px: bool) -> Self {
        if is_8px {
            Density::Dense
        } else {
            Density::Normal
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Density::Normal => Density::Dense,
            Density::Dense => Density::Normal,
        }
    }
}

/// One entry of the theme registry
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
pub enum ThemeSlot {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "default_8px")]
    Default8px,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "flat_8px")]
    Flat8px,
}

impl ThemeSlot {
    /// The slot shown for a family and density. Dark has a single variant.
    pub fn for_selection(family: ThemeFamily, density: Density) -> Self {
        match (family, density) {
            (ThemeFamily::Dark, _) => ThemeSlot::Dark,
            (ThemeFamily::Default, Density::Normal) => ThemeSlot::Default,
            (ThemeFamily::Default, Density::Dense) => ThemeSlot::Default8px,
            (ThemeFamily::Flat, Density::Normal) => ThemeSlot::Flat,
            (ThemeFamily::Flat, Density::Dense) => ThemeSlot::Flat8px,
        }
    }

    pub fn family(self) -> ThemeFamily {
        match self {
            ThemeSlot::Default | ThemeSlot::Default8px => ThemeFamily::Default,
            ThemeSlot::Dark => ThemeFamily::Dark,
            ThemeSlot::Flat | ThemeSlot::Flat8px => ThemeFamily::Flat,
        }
    }

    /// Slot whose theme this one is layered on, if any
    pub fn base(self) -> Option<ThemeSlot> {
        match self {
            ThemeSlot::Default => None,
            ThemeSlot::Default8px | ThemeSlot::Dark | ThemeSlot::Flat => Some(ThemeSlot::Default),
            ThemeSlot::Flat8px => Some(ThemeSlot::Flat),
        }
    }

    /// File stem of the slot's definition file
    pub fn file_stem(self) -> &'static str {
        match self {
            ThemeSlot::Default => "default",
            ThemeSlot::Default8px => "default_8px",
            ThemeSlot::Dark => "dark",
            ThemeSlot::Flat => "flat",
            ThemeSlot::Flat8px => "flat_8px",
        }
    }

    /// Human readable name used by the slot picker
    pub fn label(self) -> &'static str {
        match self {
            ThemeSlot::Default => "Default",
            ThemeSlot::Default8px => "Default 8px",
            ThemeSlot::Dark => "Dark",
            ThemeSlot::Flat => "Flat",
            ThemeSlot::Flat8px => "Flat 8px",
        }
    }
}

impl FromStr for ThemeSlot {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        enum_iterator::all::<ThemeSlot>()
            .find(|slot| slot.file_stem() == wanted)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;
    use rstest::rstest;

    #[rstest]
    #[case("default", ThemeFamily::Default)]
    #[case("DARK", ThemeFamily::Dark)]
    #[case(" Flat ", ThemeFamily::Flat)]
    fn should_parse_family_names(#[case] name: &str, #[case] family: ThemeFamily) {
        assert_eq!(name.parse::<ThemeFamily>(), Ok(family));
    }

    #[test]
    fn should_reject_unknown_family() {
        assert!("nonsense-family".parse::<ThemeFamily>().is_err());
    }

    #[test]
    fn should_map_every_slot_back_to_its_selection() {
        for slot in all::<ThemeSlot>() {
            let density = match slot {
                ThemeSlot::Default8px | ThemeSlot::Flat8px => Density::Dense,
                _ => Density::Normal,
            };
            assert_eq!(ThemeSlot::for_selection(slot.family(), density), slot);
        }
    }

    #[test]
    fn should_parse_slot_names() {
        assert_eq!("default-8px".parse::<ThemeSlot>(), Ok(ThemeSlot::Default8px));
        assert_eq!("Flat 8px".parse::<ThemeSlot>(), Ok(ThemeSlot::Flat8px));
        assert!("neon".parse::<ThemeSlot>().is_err());
    }

    #[test]
    fn should_toggle_density() {
        assert_eq!(Density::Normal.toggle(), Density::Dense);
        assert_eq!(Density::from_8px(true), Density::Dense);
    }

    #[test]
    fn bases_come_before_derived_slots() {
        let order: Vec<ThemeSlot> = all::<ThemeSlot>().collect();
        for (i, slot) in order.iter().enumerate() {
            if let Some(base) = slot.base() {
                assert!(order[..i].contains(&base));
            }
        }
    }
}

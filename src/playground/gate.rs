//! Format check applied to every variable edit before it is committed

use log::trace;

use crate::theme::{is_valid_color, Theme};

/// Result of checking a proposed value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Outcome of the most recent edit attempt
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EditStatus {
    /// No edit attempted since the editor was opened
    #[default]
    Clean,
    Accepted,
    Rejected,
}

impl From<Verdict> for EditStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => EditStatus::Accepted,
            Verdict::Rejected => EditStatus::Rejected,
        }
    }
}

pub struct ValidationGate;

impl ValidationGate {
    /// A variable currently holding a color only accepts colors.
    /// Anything else (lengths, font stacks, ...) accepts any value.
    pub fn check(theme: &Theme, variable: &str, value: &str) -> Verdict {
        let current = theme.get(variable);
        let verdict = match current {
            Some(current) if is_valid_color(current) && !is_valid_color(value) => Verdict::Rejected,
            _ => Verdict::Accepted,
        };
        trace!(
            "Check '{variable}': {:?} -> '{value}': {verdict:?}",
            current
        );
        verdict
    }
}

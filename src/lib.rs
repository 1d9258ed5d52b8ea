//! Design-system theme playground.
//!
//! Holds the five theme variants (default, default 8px, dark, flat, flat 8px),
//! selects the one shown by the live preview, and validates and applies edits
//! of individual theme variables.

pub mod config;
pub mod logger;
pub mod playground;
pub mod theme;

//! Theme system for theme-playground
//!
//! Themes are stacks of definition layers. A variable is either stored
//! literally or derived from another variable through a fixed set of color and
//! length functions. The built-in themes come from YAML files in `themes/`.

pub mod color;
pub mod export;
pub mod factory;
pub mod loader;
pub mod models;
pub mod patch;
pub mod registry;
pub mod variant;


pub use color::is_valid_color;
pub use factory::ThemeFactory;
pub use models::{Definition, Derivation, Layer, Theme};
pub use patch::patch;
pub use registry::ThemeRegistry;
pub use variant::{Density, ThemeFamily, ThemeSlot};

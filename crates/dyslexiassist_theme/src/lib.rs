//! Theme system for the DyslexiAssist shell.
//!
//! Themes are defined as JSON, deserialized into a typed schema, and carry
//! typography, layout dimensions, and one palette of color roles per variant
//! (light and dark modes). The active theme and variant live in gpui globals
//! written only through [`ThemeExt`].

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

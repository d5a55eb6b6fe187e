pub mod primitives;

pub mod extensions;

pub mod views;

pub mod components;

pub use dyslexiassist_theme as theme;

mod features;
pub use features::*;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;

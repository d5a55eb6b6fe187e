mod assets;
pub use assets::*;

mod app_assets;
pub use app_assets::*;

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Embedded assets bundled with the application.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "fonts/**/*.ttf"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct AppAssets;

        impl AssetProvider for AppAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(AppAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn path(&self) -> SharedString)]
pub enum AppIconKind {
    /// Document with text lines, for reading assessments.
    #[assoc(path = "icons/file_text.svg".into())]
    FileText,

    /// Open eye, for the contrast comfort test.
    #[assoc(path = "icons/eye.svg".into())]
    Eye,

    /// Headphones, for speech-to-text dictation.
    #[assoc(path = "icons/headphones.svg".into())]
    Headphones,

    /// Document with a pen, for proofreading.
    #[assoc(path = "icons/file_edit.svg".into())]
    FileEdit,

    /// Open folder, for importing text files.
    #[assoc(path = "icons/folder_open.svg".into())]
    FolderOpen,

    /// Left arrow for navigating back to the feature directory.
    #[assoc(path = "icons/arrow_left.svg".into())]
    ArrowLeft,
}

impl Into<SharedString> for AppIconKind {
    fn into(self) -> SharedString {
        self.path()
    }
}

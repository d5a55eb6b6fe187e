use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_str(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/dyslexia.json", DYSLEXIA]);

    /// Parses a theme from its JSON definition.
    pub fn from_str<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }
}

impl Global for Theme {}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

/// Error produced when a theme definition cannot be loaded.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to parse theme definition: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    /// Ordered font fallback list. The first entry is the family used for
    /// rendering; the rest preserve the intended fallback order.
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub heading_xl: f32,
    pub heading_lg: f32,
    pub heading_md: f32,
    pub heading_sm: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant selected by the [`ActiveVariantId`] global,
    /// falling back to the first variant for out-of-range ids.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let id = cx.global::<ActiveVariantId>().0;
        self.variants.get(id).unwrap_or(&self.variants[0])
    }
}

/// Index of the active variant within the current theme's variant list.
///
/// Written only by [`ThemeExt`](crate::ThemeExt); everything else reads.
pub struct ActiveVariantId(pub usize);

impl gpui::Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub palette: ThemePalette,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Light,
    Dark,
}

/// The four color roles of a variant.
///
/// Every role carries both a surface value and a paired foreground, so any
/// role can be used as a fill with readable text on top.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePalette {
    pub background: ColorRole,
    pub foreground: ColorRole,
    pub primary: ColorRole,
    pub secondary: ColorRole,
}

impl ThemePalette {
    /// Enumerates the roles in declaration order.
    pub fn roles(&self) -> [(&'static str, &ColorRole); 4] {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("primary", &self.primary),
            ("secondary", &self.secondary),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ColorRole {
    pub default: Rgba,
    pub foreground: Rgba,
}

impl ColorRole {
    pub fn all(&self) -> (Rgba, Rgba) {
        (self.default, self.foreground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn test_builtin_theme_parses() {
        let theme: &Theme = &Theme::DYSLEXIA;
        assert_eq!(theme.name, "Dyslexia Friendly");
    }

    #[test]
    fn test_font_fallback_order_is_preserved() {
        let family = &Theme::DYSLEXIA.layout.text.default_font.family;
        let names: Vec<&str> = family.iter().map(|name| name.as_ref()).collect();
        assert_eq!(names, ["OpenDyslexic", "system-ui", "sans-serif"]);
    }

    #[test]
    fn test_palette_has_exactly_four_roles() {
        for variant in &Theme::DYSLEXIA.variants.variants {
            let roles = variant.palette.roles();
            assert_eq!(roles.len(), 4);

            for (name, role) in roles {
                assert!(role.default.a > 0.0, "{name} default should be populated");
                assert!(
                    role.foreground.a > 0.0,
                    "{name} foreground should be populated"
                );
            }
        }
    }

    #[test]
    fn test_light_palette_values() {
        let palette = &Theme::DYSLEXIA.variants.variants[0].palette;

        assert_eq!(palette.background.default, rgb(0xF5F5DC));
        assert_eq!(palette.background.foreground, rgb(0x000000));
        assert_eq!(palette.foreground.default, rgb(0x000000));
        assert_eq!(palette.primary.default, rgb(0x87CEEB));
        assert_eq!(palette.primary.foreground, rgb(0x000000));
        assert_eq!(palette.secondary.default, rgb(0x466B8C));
        assert_eq!(palette.secondary.foreground, rgb(0xFFFFFF));
    }

    #[test]
    fn test_variant_order_light_then_dark() {
        let variants = &Theme::DYSLEXIA.variants.variants;
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].kind, ThemeVariantKind::Light);
        assert_eq!(variants[1].kind, ThemeVariantKind::Dark);
    }

    #[test]
    fn test_accent_roles_shared_across_variants() {
        let variants = &Theme::DYSLEXIA.variants.variants;
        let (light, dark) = (&variants[0].palette, &variants[1].palette);

        assert_eq!(light.primary.default, dark.primary.default);
        assert_eq!(light.secondary.default, dark.secondary.default);
    }

    #[test]
    fn test_color_role_all() {
        let palette = &Theme::DYSLEXIA.variants.variants[0].palette;
        let (default, foreground) = palette.primary.all();

        assert_eq!(default, rgb(0x87CEEB));
        assert_eq!(foreground, rgb(0x000000));
    }

    #[test]
    fn test_from_str_rejects_invalid_json() {
        let error = Theme::from_str("not a theme").unwrap_err();
        assert!(matches!(error, ThemeError::Parse(_)));
    }

    #[test]
    fn test_from_str_rejects_empty_variant_list() {
        let json = r##"{
            "name": "Broken",
            "layout": {
                "text": {
                    "base_size": 16,
                    "default_font": {
                        "family": "OpenDyslexic",
                        "line_height": "150%",
                        "sizes": {
                            "heading_xl": "2.25rem",
                            "heading_lg": "1.875rem",
                            "heading_md": "1.5rem",
                            "heading_sm": "1.125rem",
                            "body": "1rem",
                            "caption": "0.875rem"
                        },
                        "weights": {
                            "heading_xl": 700,
                            "heading_lg": 700,
                            "heading_md": 600,
                            "heading_sm": 400,
                            "body": 400,
                            "caption": 400
                        }
                    }
                },
                "corner_radii": { "xl": 16, "lg": 12, "md": 8, "sm": 4 },
                "size": { "xl": 48, "lg": 40, "md": 32, "sm": 24 },
                "padding": { "xl": 32, "lg": 16, "md": 8, "sm": 4 }
            },
            "variants": []
        }"##;

        let error = Theme::from_str(json).unwrap_err();
        assert!(matches!(error, ThemeError::Parse(_)));
    }
}

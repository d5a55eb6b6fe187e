use enum_assoc::Assoc;
use gpui::App;

use crate::ThemeExt;

/// Text size variants that resolve to theme-defined values.
///
/// Use `resolve()` to get the actual `AbsoluteLength` from the current theme.
/// Each size carries its paired font weight so headings stay bold and body
/// text stays regular without callers hardcoding either.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> gpui::FontWeight)]
pub enum ThemeTextSizeKind {
    /// Extra large heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_xl)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_xl))]
    Xl,
    /// Large heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_lg))]
    Lg,
    /// Medium heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_md))]
    Md,
    /// Small heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_sm)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.heading_sm))]
    Sm,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.body))]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.caption))]
    Caption,
}

/// Component size variants that resolve to theme-defined pixel values.
///
/// Each size has a corresponding corner radius for consistent styling.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
#[func(pub fn corner_radii(&self) -> ThemeLayoutCornerRadiiKind)]
pub enum ThemeLayoutSizeKind {
    /// Extra large component size.
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Xl)]
    Xl,
    /// Large component size.
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Lg)]
    Lg,
    /// Medium component size.
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Md)]
    Md,
    /// Small component size.
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    /// Extra large padding.
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    /// Large padding.
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    /// Medium padding.
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    /// Small padding.
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    /// Extra large corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    /// Large corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    /// Medium corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    /// Small corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Color roles from the active theme variant.
///
/// `resolve()` gives the role's surface color and `foreground()` the color
/// of content drawn on that surface, so a filled element never mixes a
/// surface from one role with text from another.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn foreground(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeColorRoleKind {
    /// Page and panel surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).palette.background.default)]
    #[assoc(foreground = cx.get_theme().variants.active(cx).palette.background.foreground)]
    Background,
    /// Default text and iconography.
    #[assoc(resolve = cx.get_theme().variants.active(cx).palette.foreground.default)]
    #[assoc(foreground = cx.get_theme().variants.active(cx).palette.foreground.foreground)]
    Foreground,
    /// High emphasis interactive elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).palette.primary.default)]
    #[assoc(foreground = cx.get_theme().variants.active(cx).palette.primary.foreground)]
    Primary,
    /// Supporting accents and muted emphasis.
    #[assoc(resolve = cx.get_theme().variants.active(cx).palette.secondary.default)]
    #[assoc(foreground = cx.get_theme().variants.active(cx).palette.secondary.foreground)]
    Secondary,
}

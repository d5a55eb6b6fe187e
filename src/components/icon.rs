use gpui::{
    Hsla, IntoElement, Length, RenderOnce, SharedString, SizeRefinement, Styled,
    prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon component with configurable size and color.
///
/// Defaults to the active variant's default text color so icons stay legible
/// when the theme variant changes.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    pub(crate) size: SizeRefinement<Length>,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: SizeRefinement::default(),
            color: None,
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        let size = size.into();
        self.size = SizeRefinement {
            width: Some(size),
            height: Some(size),
        };
        self
    }

    /// Sets a custom color, overriding the theme's default text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let foreground_color = cx.get_theme().variants.active(cx).palette.foreground.default;
        let size = self.size;
        let width = size.width.unwrap_or(px(16.).into());
        let height = size.height.unwrap_or(px(16.).into());

        svg()
            .path(self.path)
            .text_color(foreground_color)
            .w(width)
            .min_w(width)
            .h(height)
            .min_h(height)
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

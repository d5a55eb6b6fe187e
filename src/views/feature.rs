use gpui::{
    ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, div, relative,
};

use crate::{
    components::Icon,
    features::Route,
    theme::{ThemeColorRoleKind, ThemeExt, ThemeTextSizeKind},
    utils::RgbaExt,
};

/// Destination surface for a single feature. Shows the feature's
/// identity; the way back lives in the nav bar.
#[derive(IntoElement)]
pub struct FeaturePage {
    id: ElementId,
    route: Route,
}

impl FeaturePage {
    pub fn new(id: impl Into<ElementId>, route: Route) -> Self {
        Self {
            id: id.into(),
            route,
        }
    }
}

impl RenderOnce for FeaturePage {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let descriptor = self.route.descriptor();

        let gap = cx.get_theme().layout.padding.lg;
        let chip_padding = cx.get_theme().layout.padding.lg;
        let chip_corner_radius = cx.get_theme().layout.corner_radii.lg;
        let icon_size = cx.get_theme().layout.size.md;

        let foreground_color = ThemeColorRoleKind::Foreground.resolve(cx);
        let primary_color = ThemeColorRoleKind::Primary.resolve(cx);
        let muted_color = foreground_color.alpha(0.75);

        div()
            .id(self.id.clone())
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(gap)
            .p(cx.get_theme().layout.padding.xl)
            .child(
                div()
                    .p(chip_padding)
                    .rounded(chip_corner_radius)
                    .bg(primary_color.alpha(0.1))
                    .child(Icon::new(descriptor.icon).size(icon_size)),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Lg.resolve(cx))
                    .font_weight(ThemeTextSizeKind::Lg.weight(cx))
                    .text_color(foreground_color)
                    .child(descriptor.title),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Sm.resolve(cx))
                    .font_weight(ThemeTextSizeKind::Sm.weight(cx))
                    .text_color(muted_color)
                    .max_w(relative(0.6))
                    .child(descriptor.description),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Body.resolve(cx))
                    .text_color(foreground_color)
                    .child("This tool is coming soon."),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                    .text_color(muted_color)
                    .child(self.route.path()),
            )
    }
}

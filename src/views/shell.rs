use gpui::{
    AnyView, Entity, FocusHandle, FontFallbacks, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, Styled, Window, div, prelude::FluentBuilder,
};

use crate::{
    init_for_window,
    theme::{ThemeColorRoleKind, ThemeExt},
};

/// Wraps a single content view with the app-wide baseline: document
/// language, the dyslexia friendly font stack, and the active palette.
///
/// The shell never decides which variant is active. It re-renders when
/// its child notifies, which is how palette changes reach the window
/// chrome.
pub struct Shell {
    language: SharedString,
    child: AnyView,
    focus_handle: FocusHandle,
}

impl Shell {
    pub fn new<V: Render>(child: &Entity<V>, cx: &mut gpui::Context<Self>) -> Self {
        cx.observe(child, |_this, _child, cx| cx.notify()).detach();

        Self {
            language: "en".into(),
            child: child.clone().into(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// BCP 47 tag for the language the interface is presented in.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<SharedString>, cx: &mut gpui::Context<Self>) {
        self.language = language.into();
        cx.notify();
    }
}

impl Render for Shell {
    fn render(&mut self, window: &mut Window, cx: &mut gpui::Context<Self>) -> impl IntoElement {
        init_for_window(window, cx);

        let font = &cx.get_theme().layout.text.default_font;
        let font_family = font.family[0].clone();
        let font_fallbacks = (font.family.len() > 1).then(|| {
            FontFallbacks::from_fonts(font.family[1..].iter().map(|f| f.to_string()).collect())
        });
        let text_size = font.sizes.body;
        let line_height = font.line_height;

        div()
            .id("shell")
            .track_focus(&self.focus_handle)
            .tab_group()
            .size_full()
            .font_family(font_family)
            .map(|mut this| {
                this.style().text.font_fallbacks = font_fallbacks;
                this
            })
            .text_size(text_size)
            .line_height(line_height)
            .text_color(ThemeColorRoleKind::Foreground.resolve(cx))
            .bg(ThemeColorRoleKind::Background.resolve(cx))
            .child(self.child.clone())
    }
}

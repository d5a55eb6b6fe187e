use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div,
};

use crate::{
    components::NavBar,
    features::Route,
    theme::{ThemeExt, ThemeVariantKind},
    views::{FeaturePage, HomePage},
};

/// Owns which page is visible and is the only writer of the active
/// theme variant. Every palette or navigation change funnels through
/// here so the rest of the tree can stay read only.
pub struct Workspace {
    active_route: Option<Route>,
}

impl Workspace {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self { active_route: None }
    }

    /// `None` means the feature directory is showing.
    pub fn active_route(&self) -> Option<Route> {
        self.active_route
    }

    pub fn navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        self.active_route = Some(route);
        cx.notify();
    }

    pub fn go_home(&mut self, cx: &mut Context<Self>) {
        self.active_route = None;
        cx.notify();
    }

    /// Flips between the light and dark variants and repaints.
    pub fn toggle_variant(&mut self, cx: &mut Context<Self>) {
        let next = match cx.get_theme().variants.active(cx).kind {
            ThemeVariantKind::Light => ThemeVariantKind::Dark,
            ThemeVariantKind::Dark => ThemeVariantKind::Light,
        };

        cx.set_active_variant(next);
        cx.notify();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let workspace = cx.entity();

        let nav_bar = NavBar::new("nav-bar", "DyslexiAssist")
            .on_toggle_variant(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.toggle_variant(cx);
            }));
        let nav_bar = if self.active_route.is_some() {
            nav_bar.on_back(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.go_home(cx);
            }))
        } else {
            nav_bar
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(nav_bar)
            .child(match self.active_route {
                Some(route) => FeaturePage::new("feature-page", route).into_any_element(),
                None => HomePage::new("home-page")
                    .on_navigate(move |route, _window, cx| {
                        workspace.update(cx, |this, cx| this.navigate(route, cx));
                    })
                    .into_any_element(),
            })
    }
}

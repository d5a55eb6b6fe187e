use std::time::Duration;

use gpui::{
    CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, div, prelude::FluentBuilder, px,
};
use gpui_transitions::Lerp;

use crate::{
    AppIconKind, ElementIdExt, components::Icon, conitional_transition,
    extensions::mouse_handleable::{MouseHandleable, MouseHandlers},
    theme::{ThemeColorRoleKind, ThemeExt, ThemeLayoutSizeKind, ThemeTextSizeKind},
    utils::{
        PixelsExt, RgbaExt, disabled_transition, hover_and_focus_border_color_transition,
    },
};

/// Visual emphasis levels for [`Button`].
pub enum ButtonVariant {
    /// Filled with the primary role, for the main call to action.
    Primary,
    /// Filled with the secondary role, for supporting actions.
    Secondary,
    /// Transparent until hovered, for inline actions.
    Ghost,
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ThemeLayoutSizeKind,
    disabled: bool,
    full_width: bool,
    tab_stop: bool,
    leading_icon: Option<AppIconKind>,
    mouse_handlers: MouseHandlers,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ThemeLayoutSizeKind::Lg,
            disabled: false,
            full_width: false,
            tab_stop: true,
            leading_icon: None,
            mouse_handlers: MouseHandlers::new(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ThemeLayoutSizeKind) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stretches the button to fill its container's width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Removes the button from the tab order. Useful when a focusable
    /// ancestor already represents the same action.
    pub fn tab_stop(mut self, tab_stop: bool) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    /// Renders an icon before the label, tinted like the label.
    pub fn leading_icon(mut self, icon: AppIconKind) -> Self {
        self.leading_icon = Some(icon);
        self
    }
}

impl MouseHandleable for Button {
    fn mouse_handlers_mut(&mut self) -> &mut MouseHandlers {
        &mut self.mouse_handlers
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let text_size = ThemeTextSizeKind::Body.resolve(cx);
        let text_weight = ThemeTextSizeKind::Body.weight(cx);
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let height = self.size.resolve(cx);
        let corner_radius = self.size.corner_radii().resolve(cx);
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let icon_gap = cx.get_theme().layout.padding.md;
        let vertical_padding = height.padding_needed_for_height(window, text_size, line_height);

        let foreground_color = ThemeColorRoleKind::Foreground.resolve(cx);

        let (background_color, label_color) = match self.variant {
            ButtonVariant::Primary => (
                ThemeColorRoleKind::Primary.resolve(cx),
                ThemeColorRoleKind::Primary.foreground(cx),
            ),
            ButtonVariant::Secondary => (
                ThemeColorRoleKind::Secondary.resolve(cx),
                ThemeColorRoleKind::Secondary.foreground(cx),
            ),
            ButtonVariant::Ghost => (foreground_color.alpha(0.), foreground_color),
        };

        let (hover_color, click_down_color) = match self.variant {
            ButtonVariant::Ghost => (foreground_color.alpha(0.06), foreground_color.alpha(0.12)),
            _ => (
                background_color.lerp(&foreground_color, 0.07),
                background_color.lerp(&foreground_color, 0.16),
            ),
        };

        let border_color = background_color.lerp(&foreground_color, 0.12);
        let border_hover_color = background_color.lerp(&foreground_color, 0.25);

        let is_disabled = self.disabled;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_cx, _window| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_cx, _window| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let is_tab_stop = self.tab_stop;
        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                move |_window, cx| cx.focus_handle().tab_stop(is_tab_stop),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let background_color_transition = conitional_transition!(
            self.id.with_suffix("state:transition:background_color"),
            window,
            cx,
            Duration::from_millis(200),
            {
                is_click_down => click_down_color,
                is_hover => hover_color,
                _ => background_color
            }
        );

        let border_color_transition = hover_and_focus_border_color_transition(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            is_hover,
            is_focus,
            border_color,
            border_hover_color,
            foreground_color,
        );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .h(height)
            .min_h(height)
            .when(self.full_width, |this| this.w_full())
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .flex()
            .items_center()
            .justify_center()
            .gap(icon_gap)
            .rounded(corner_radius)
            .bg(*background_color_transition.evaluate(window, cx))
            .border(px(1.))
            .border_color(*border_color_transition.evaluate(window, cx))
            .opacity(*disabled_transition.evaluate(window, cx))
            .text_size(text_size)
            .font_weight(text_weight)
            .line_height(line_height)
            .text_color(label_color)
            .when_some(self.leading_icon, |this, icon| {
                this.child(Icon::new(icon).color(label_color))
            })
            .child(self.label)
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Prevents focus from landing on the button when clicked.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .map(|mut this| {
                    if let Some((button, handler)) = self.mouse_handlers.on_mouse_down {
                        if button != gpui::MouseButton::Left {
                            this = this.on_mouse_down(button, move |event, window, cx| {
                                window.prevent_default();
                                cx.stop_propagation();
                                (handler)(event, window, cx);
                            });
                        }
                    }

                    if let Some((button, handler)) = self.mouse_handlers.on_mouse_up {
                        this = this.on_mouse_up(button, move |event, window, cx| {
                            window.prevent_default();
                            cx.stop_propagation();
                            (handler)(event, window, cx);
                        });
                    }

                    if let Some(handler) = self.mouse_handlers.on_any_mouse_down {
                        this = this.on_any_mouse_down(move |event, window, cx| {
                            window.prevent_default();
                            cx.stop_propagation();
                            (handler)(event, window, cx);
                        });
                    }

                    if let Some(handler) = self.mouse_handlers.on_any_mouse_up {
                        this.interactivity()
                            .on_any_mouse_up(move |event, window, cx| {
                                window.prevent_default();
                                cx.stop_propagation();
                                (handler)(event, window, cx);
                            });
                    }

                    let on_click = self.mouse_handlers.on_click;
                    this.on_click(move |event, window, cx| {
                        window.prevent_default();
                        cx.stop_propagation();

                        if !is_focus {
                            // We only want to blur if something else may be focused.
                            window.blur();
                        }

                        is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                        cx.notify(is_click_down_state_on_click.entity_id());

                        if let Some(on_click) = &on_click {
                            (on_click)(event, window, cx);
                        }
                    })
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // We need to clean up states when the mouse clicks down on the component, leaves its bounds, then unclicks.

                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());

                    is_click_down_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_button_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Get Started →");
            assert_eq!(button.label, SharedString::from("Get Started →"));
            assert!(!button.disabled, "Button should start enabled");
            assert!(!button.full_width, "Button should start content sized");
            assert!(
                matches!(button.variant, ButtonVariant::Primary),
                "Button should default to the primary variant"
            );
        });
    }

    #[gpui::test]
    fn test_button_variant(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Label").variant(ButtonVariant::Ghost);
            assert!(matches!(button.variant, ButtonVariant::Ghost));

            let button = Button::new("test-button", "Label").variant(ButtonVariant::Secondary);
            assert!(matches!(button.variant, ButtonVariant::Secondary));
        });
    }

    #[gpui::test]
    fn test_button_disabled_state(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Label").disabled(true);
            assert!(button.disabled, "Button should be disabled");

            let button = Button::new("test-button", "Label").disabled(false);
            assert!(!button.disabled, "Button should be enabled");
        });
    }

    #[gpui::test]
    fn test_button_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Label")
                .variant(ButtonVariant::Secondary)
                .size(ThemeLayoutSizeKind::Md)
                .full_width()
                .disabled(true);

            assert!(matches!(button.variant, ButtonVariant::Secondary));
            assert!(matches!(button.size, ThemeLayoutSizeKind::Md));
            assert!(button.full_width);
            assert!(button.disabled);
        });
    }

    #[gpui::test]
    fn test_button_on_click_callback(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Label").on_click(|_event, _window, _cx| {});

            assert!(
                button.mouse_handlers.on_click.is_some(),
                "Button should have on_click callback"
            );
        });
    }

    #[gpui::test]
    fn test_button_leading_icon_and_tab_stop(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = Button::new("test-button", "Back")
                .leading_icon(AppIconKind::ArrowLeft)
                .tab_stop(false);

            assert!(button.leading_icon.is_some(), "Button should carry an icon");
            assert!(!button.tab_stop, "Button should be out of the tab order");

            let button = Button::new("test-button", "Label");
            assert!(button.leading_icon.is_none());
            assert!(button.tab_stop, "Buttons should be tabbable by default");
        });
    }

    #[gpui::test]
    fn test_button_renders_in_window(cx: &mut TestAppContext) {
        use crate::theme::{Theme, ThemeExt};

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ButtonTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);

        // The window creation itself validates rendering works
    }

    /// Test view that contains a Button
    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Button::new("test-button", "Get Started →"))
        }
    }
}

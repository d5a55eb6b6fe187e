use gpui::{App, KeyBinding, Window, actions};

use crate::theme::ThemeExt;

actions!(dyslexiassist, [FocusNext, FocusPrev, Quit]);

/// Registers app-wide keyboard behavior. Tab and shift-tab walk the
/// window's tab stops so every control stays reachable without a
/// pointer.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("tab", FocusNext, None),
        KeyBinding::new("shift-tab", FocusPrev, None),
        KeyBinding::new("cmd-q", Quit, None),
    ]);

    cx.on_action(|_: &Quit, cx| cx.quit());

    cx.on_action(move |_: &FocusNext, cx| {
        // Focus moves after the dispatch borrow on the window ends.
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &FocusPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });
}

/// Matches the window's rem unit to the theme's base text size so rem
/// derived sizes resolve as authored.
pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}

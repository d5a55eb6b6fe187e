use std::time::Duration;

use gpui::{App, ElementId, Rgba, Window};
use gpui_transitions::Transition;

use crate::conitional_transition;

/// Animates an element's border color between its resting, hover, and focus
/// colors. Focus wins over hover.
pub fn hover_and_focus_border_color_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_hover: bool,
    is_focus: bool,
    default_color: Rgba,
    hover_color: Rgba,
    focus_color: Rgba,
) -> Transition<Rgba> {
    conitional_transition!(
        id.into(),
        window,
        cx,
        Duration::from_millis(300),
        {
            is_focus => focus_color,
            is_hover => hover_color,
            _ => default_color
        }
    )
}

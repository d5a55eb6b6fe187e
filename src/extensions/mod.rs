/// Traits and types for attaching mouse event handlers to components.
pub mod mouse_handleable;

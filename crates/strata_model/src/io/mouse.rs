//! Mouse button, wheel and move events

use crate::event::ReflectedEventBase;
use crate::item::{leaf_items, reflected_view};

pub const MOUSE_SOURCE: &str = "mouse";

pub const BUTTON_TYPE: &str = "button";
pub const WHEEL_TYPE: &str = "wheel";
pub const MOVE_TYPE: &str = "move";

/// Button names
pub const LEFT_BUTTON: &str = "left";
pub const MIDDLE_BUTTON: &str = "middle";
pub const RIGHT_BUTTON: &str = "right";

/// Wheel directions stored in the `wheel` field
pub const UP_WHEEL: &str = "up_wheel";
pub const DOWN_WHEEL: &str = "down_wheel";

reflected_view! {
    /// A mouse button changed state
    ReflectedMouseButtonEventBase : ReflectedEventBase, ReflectedMouseButtonEvent, ConstReflectedMouseButtonEvent
}

leaf_items!(ReflectedMouseButtonEventBase {
    button => "button" : Int,
});

typed_event!(ReflectedMouseButtonEventBase, MOUSE_SOURCE, BUTTON_TYPE);

reflected_view! {
    /// The wheel turned
    ReflectedMouseWheelEventBase : ReflectedEventBase, ReflectedMouseWheelEvent, ConstReflectedMouseWheelEvent
}

leaf_items!(ReflectedMouseWheelEventBase {
    /// [`UP_WHEEL`] or [`DOWN_WHEEL`]
    wheel => "wheel" : String,
});

typed_event!(ReflectedMouseWheelEventBase, MOUSE_SOURCE, WHEEL_TYPE);

reflected_view! {
    /// The pointer moved
    ReflectedMouseMoveEventBase : ReflectedEventBase, ReflectedMouseMoveEvent, ConstReflectedMouseMoveEvent
}

leaf_items!(ReflectedMouseMoveEventBase {
    x => "x" : Int,
    y => "y" : Int,
});

typed_event!(ReflectedMouseMoveEventBase, MOUSE_SOURCE, MOVE_TYPE);

//! Keyboard button events

use core::fmt;

use strata_core::{Property, NONE};

use crate::error::Result;
use crate::event::ReflectedEventBase;
use crate::item::{leaf_items, reflected_view};

pub const KEYBOARD_SOURCE: &str = "keyboard";
pub const BUTTON_TYPE: &str = "button";

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardAction {
    Released,
    Pressed,
    ShortPress,
    LongPress,
    SinglePress,
    DoublePress,
}

impl KeyboardAction {
    pub const ALL: [KeyboardAction; 6] = [
        Self::Released,
        Self::Pressed,
        Self::ShortPress,
        Self::LongPress,
        Self::SinglePress,
        Self::DoublePress,
    ];

    /// Name stored in the event's `action` field
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Released => "released",
            Self::Pressed => "pressed",
            Self::ShortPress => "short",
            Self::LongPress => "long",
            Self::SinglePress => "single",
            Self::DoublePress => "double",
        }
    }

    /// Parse a stored action name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

impl fmt::Display for KeyboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

reflected_view! {
    /// A key changed state
    ReflectedKeyboardEventBase : ReflectedEventBase, ReflectedKeyboardEvent, ConstReflectedKeyboardEvent
}

leaf_items!(ReflectedKeyboardEventBase {
    /// Platform key code
    key => "key" : Int,
});

typed_event!(ReflectedKeyboardEventBase, KEYBOARD_SOURCE, BUTTON_TYPE);

/// Build a standalone keyboard event tree
pub fn make_patch(action: KeyboardAction, key: i32) -> Result<Property> {
    let mut patch = Property::None;
    let mut event = ReflectedKeyboardEvent::new(&NONE, &mut patch)?;
    event.key()?.set(key);
    event.action()?.set(action.as_str());
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::event::ConstReflectedEvent;

    #[test]
    fn test_make_patch() {
        let patch = make_patch(KeyboardAction::Pressed, 42).unwrap();

        assert_eq!(patch.get("source").unwrap(), &Property::from("keyboard"));
        assert_eq!(patch.get("type").unwrap(), &Property::from("button"));
        assert_eq!(patch.get("action").unwrap(), &Property::from("pressed"));
        assert_eq!(patch.get("key").unwrap(), &Property::from(42));

        let event = ConstReflectedKeyboardEvent::new(&patch, &NONE).unwrap();
        assert!(event.key().unwrap() == 42i32);
        assert_eq!(KeyboardAction::from_name(&event.action().unwrap().as_string().unwrap()), Some(KeyboardAction::Pressed));
    }

    #[test]
    fn test_const_view_checks_discriminators() {
        let mut orig = Property::None;
        orig.set("source", "mouse").unwrap();
        orig.set("type", "button").unwrap();

        let err = ConstReflectedKeyboardEvent::new(&orig, &NONE).unwrap_err();
        assert!(matches!(err, ModelError::UnexpectedEvent { expected: "keyboard", .. }));
        assert!(err.is_unexpected_item_type());
        assert!(ConstReflectedKeyboardEvent::new(&NONE, &NONE).is_err());
    }

    #[test]
    fn test_cast_from_generic_event() {
        let patch = make_patch(KeyboardAction::Released, 7).unwrap();
        let event = ConstReflectedEvent::new(&patch, &NONE).unwrap();
        let keyboard: ConstReflectedKeyboardEvent<'_> = event.cast().unwrap();
        assert!(keyboard.key().unwrap() == 7i32);
    }

    #[test]
    fn test_action_names() {
        for action in KeyboardAction::ALL {
            assert_eq!(KeyboardAction::from_name(action.as_str()), Some(action));
        }
        assert_eq!(KeyboardAction::ShortPress.to_string(), "short");
        assert_eq!(KeyboardAction::from_name("tap"), None);
    }
}

//! Input device events
//!
//! Writable views stamp their `source`/`type` discriminators on
//! construction; read-only views reject events with other discriminators.

/// Declare `FromReflected` for an event view with fixed discriminators
macro_rules! typed_event {
    ($view:ident, $source:expr, $event_type:expr) => {
        impl<'a> $crate::item::FromReflected<'a, &'a mut ::strata_core::Property>
            for $view<'a, &'a mut ::strata_core::Property>
        {
            fn from_item(item: $crate::item::ReflectedItem<'a>) -> $crate::error::Result<Self> {
                let mut inner = <$crate::event::ReflectedEvent<'a> as $crate::item::FromReflected<
                    'a,
                    &'a mut ::strata_core::Property,
                >>::from_item(item)?;
                inner.stamp($source, $event_type)?;
                Ok(Self { inner })
            }
        }

        impl<'a> $crate::item::FromReflected<'a, &'a ::strata_core::Property> for $view<'a, &'a ::strata_core::Property> {
            fn from_item(item: $crate::item::ConstReflectedItem<'a>) -> $crate::error::Result<Self> {
                let inner = <$crate::event::ConstReflectedEvent<'a> as $crate::item::FromReflected<
                    'a,
                    &'a ::strata_core::Property,
                >>::from_item(item)?;
                inner.verify($source, $event_type)?;
                Ok(Self { inner })
            }
        }
    };
}

pub mod keyboard;
pub mod mouse;

pub use keyboard::{
    make_patch, ConstReflectedKeyboardEvent, KeyboardAction, ReflectedKeyboardEvent, ReflectedKeyboardEventBase,
};
pub use mouse::{
    ConstReflectedMouseButtonEvent, ConstReflectedMouseMoveEvent, ConstReflectedMouseWheelEvent,
    ReflectedMouseButtonEvent, ReflectedMouseButtonEventBase, ReflectedMouseMoveEvent, ReflectedMouseMoveEventBase,
    ReflectedMouseWheelEvent, ReflectedMouseWheelEventBase,
};

//! Shared state registry.
//!
//! A keyed store that lets applets which never import each other declare,
//! read and mutate the same piece of state. Each slot is named by a
//! [`StateKey`], a `const`-friendly token carrying the slot's path and the
//! value's type. The key is defined once in an "interface" module and every
//! consumer imports it; redefining a key with another path creates a
//! silently independent slot.
//!
//! The registry is an explicitly constructed context object rather than a
//! process global, so tests build isolated instances. It is single-threaded
//! (`!Send`): all reads and writes happen on the UI loop, and background work
//! reaches it only through the loop's event channel.
//!
//! Writes propagate synchronously. [`Accessor::set`] notifies every observer
//! of the key before it returns, and [`Computed`] uses [`StateRegistry::track`]
//! to re-run a render function whenever a key it read changes.

mod accessor;
mod computed;
mod key;
mod registry;

pub use accessor::{Accessor, Binding};
pub use computed::Computed;
pub use key::StateKey;
pub use registry::{StateRegistry, Subscription};

/// Configuration-shape errors raised by the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state key `{key}` holds `{declared}` but was declared as `{requested}`")]
    TypeMismatch {
        key: &'static str,
        declared: &'static str,
        requested: &'static str,
    },
    #[error("state key `{0}` has not been declared")]
    UnknownKey(String),
}

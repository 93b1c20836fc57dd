use std::any::type_name;
use std::fmt;

/// Type-tagged name of a registry slot.
///
/// Identity is the path: two keys with the same path refer to the same slot
/// (and must agree on `T`), two keys with different paths are independent
/// even when `T` is the same. `initial` supplies the value used when the slot
/// is created through [`StateRegistry::state`](super::StateRegistry::state).
pub struct StateKey<T> {
    path: &'static str,
    initial: fn() -> T,
}

impl<T> StateKey<T> {
    pub const fn new(path: &'static str, initial: fn() -> T) -> Self {
        Self { path, initial }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }

    pub fn initial(&self) -> T {
        (self.initial)()
    }
}

impl<T> Clone for StateKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StateKey<T> {}

impl<T> PartialEq for StateKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<T> Eq for StateKey<T> {}

impl<T> fmt::Debug for StateKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateKey")
            .field("path", &self.path)
            .field("type", &type_name::<T>())
            .finish()
    }
}

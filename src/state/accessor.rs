use super::registry::{ObserverList, Slot, Subscription};
use std::fmt;
use std::rc::Rc;

/// Typed handle to one registry slot.
///
/// Reads never block. Writes replace the value and run every observer of the
/// slot before returning, so the next read anywhere sees the new value.
/// Writing from inside a [`with`](Self::with) closure on the same slot panics;
/// render functions only read.
pub struct Accessor<T> {
    slot: Rc<Slot<T>>,
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: 'static> Accessor<T> {
    pub(crate) fn new(slot: Rc<Slot<T>>) -> Self {
        Self { slot }
    }

    pub fn key(&self) -> &'static str {
        self.slot.path
    }

    /// Borrow the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.slot.reads.record(self.slot.path);
        f(&self.slot.value.borrow())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    pub fn set(&self, value: T) {
        drop(self.slot.value.replace(value));
        self.slot.observers.notify();
    }

    /// Mutate the value in place, then notify like [`set`](Self::set).
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.slot.value.borrow_mut());
        self.slot.observers.notify();
        out
    }

    pub fn subscribe(&self, observer: impl Fn() + 'static) -> Subscription {
        ObserverList::subscribe(&self.slot.observers, Rc::new(observer))
    }

    pub fn as_binding(&self) -> Binding<T>
    where
        T: Clone,
    {
        let reader = self.clone();
        let writer = self.clone();
        Binding::new(move || reader.get(), move |value| writer.set(value))
    }

    /// Whether both accessors refer to the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: fmt::Debug> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("key", &self.slot.path)
            .field("value", &*self.slot.value.borrow())
            .finish()
    }
}

/// A get/set pair handed to controls that both display and change a value.
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Binding(..)")
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{StateKey, StateRegistry};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        name: String,
        visits: u32,
    }

    const PROFILE: StateKey<Profile> = StateKey::new("test.profile", initial_profile);

    fn initial_profile() -> Profile {
        Profile {
            name: "anon".into(),
            visits: 0,
        }
    }

    #[test]
    fn test_update_mutates_field_and_notifies() {
        let registry = StateRegistry::new();
        let profile = registry.state(&PROFILE).unwrap();
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = Rc::clone(&hits);
            profile.subscribe(move || hits.set(hits.get() + 1))
        };

        let visits = profile.update(|p| {
            p.visits += 1;
            p.visits
        });

        assert_eq!(visits, 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(registry.state(&PROFILE).unwrap().get().visits, 1);
    }

    #[test]
    fn test_binding_reads_and_writes_slot() {
        let registry = StateRegistry::new();
        let profile = registry.state(&PROFILE).unwrap();
        let binding = profile.as_binding();

        assert_eq!(binding.get().name, "anon");
        binding.set(Profile {
            name: "ada".into(),
            visits: 3,
        });
        assert_eq!(profile.get().name, "ada");
        assert_eq!(profile.key(), "test.profile");
    }

    #[test]
    fn test_observer_may_read_during_notify() {
        let registry = StateRegistry::new();
        let profile = registry.state(&PROFILE).unwrap();
        let seen = Rc::new(Cell::new(0));
        let _sub = {
            let seen = Rc::clone(&seen);
            let reader = profile.clone();
            profile.subscribe(move || seen.set(reader.with(|p| p.visits)))
        };

        profile.update(|p| p.visits = 9);
        assert_eq!(seen.get(), 9);
    }
}

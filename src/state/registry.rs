use super::accessor::Accessor;
use super::{StateError, StateKey};
use std::any::{type_name, Any};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

pub(crate) type Observer = Rc<dyn Fn()>;

/// Observers of one slot, keyed by subscription id.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: Cell<u64>,
    observers: RefCell<BTreeMap<u64, Observer>>,
}

impl ObserverList {
    pub(crate) fn subscribe(list: &Rc<ObserverList>, observer: Observer) -> Subscription {
        let id = list.next_id.get();
        list.next_id.set(id + 1);
        list.observers.borrow_mut().insert(id, observer);
        Subscription {
            list: Rc::downgrade(list),
            id,
        }
    }

    /// Run every observer. The list is snapshotted first so observers may
    /// subscribe or unsubscribe while it runs; an observer removed by an
    /// earlier one in the same pass is skipped.
    pub(crate) fn notify(&self) {
        let snapshot: Vec<(u64, Observer)> = self
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();
        for (id, observer) in snapshot {
            if self.observers.borrow().contains_key(&id) {
                observer();
            }
        }
    }

    fn len(&self) -> usize {
        self.observers.borrow().len()
    }
}

/// Keeps an observer registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    list: Weak<ObserverList>,
    id: u64,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.observers.borrow_mut().remove(&self.id);
        }
    }
}

/// Stack of read sets, one frame per active [`StateRegistry::track`] call.
#[derive(Default)]
pub(crate) struct ReadLog {
    frames: RefCell<Vec<BTreeSet<&'static str>>>,
}

impl ReadLog {
    pub(crate) fn record(&self, path: &'static str) {
        if let Some(frame) = self.frames.borrow_mut().last_mut() {
            frame.insert(path);
        }
    }
}

pub(crate) struct Slot<T> {
    pub(crate) path: &'static str,
    pub(crate) value: RefCell<T>,
    pub(crate) observers: Rc<ObserverList>,
    pub(crate) reads: Rc<ReadLog>,
}

struct Entry {
    type_name: &'static str,
    slot: Rc<dyn Any>,
    observers: Rc<ObserverList>,
}

impl Entry {
    fn accessor<T: 'static>(&self, path: &'static str) -> Result<Accessor<T>, StateError> {
        Rc::clone(&self.slot)
            .downcast::<Slot<T>>()
            .map(Accessor::new)
            .map_err(|_| StateError::TypeMismatch {
                key: path,
                declared: self.type_name,
                requested: type_name::<T>(),
            })
    }
}

#[derive(Default)]
struct Inner {
    slots: RefCell<HashMap<&'static str, Entry>>,
    reads: Rc<ReadLog>,
}

/// Process-wide keyed store, passed by handle through the composition root.
///
/// Cloning is cheap and every clone refers to the same slots.
#[derive(Clone, Default)]
pub struct StateRegistry {
    inner: Rc<Inner>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an accessor for `key`, creating the slot with `initial` if it
    /// does not exist yet.
    ///
    /// First declaration wins: when the slot already exists `initial` is
    /// dropped and the existing value is kept. A slot that exists with a
    /// different value type fails with [`StateError::TypeMismatch`] here,
    /// not at first use.
    pub fn declare<T: 'static>(
        &self,
        key: &StateKey<T>,
        initial: T,
    ) -> Result<Accessor<T>, StateError> {
        let path = key.path();
        if let Some(entry) = self.inner.slots.borrow().get(path) {
            return entry.accessor(path);
        }

        let slot = Rc::new(Slot {
            path,
            value: RefCell::new(initial),
            observers: Rc::default(),
            reads: Rc::clone(&self.inner.reads),
        });
        let entry = Entry {
            type_name: type_name::<T>(),
            slot: Rc::clone(&slot) as Rc<dyn Any>,
            observers: Rc::clone(&slot.observers),
        };
        self.inner.slots.borrow_mut().insert(path, entry);
        debug!(key = path, ty = type_name::<T>(), "declared state slot");
        Ok(Accessor::new(slot))
    }

    /// Declare `key` with the key's own initial value.
    pub fn state<T: 'static>(&self, key: &StateKey<T>) -> Result<Accessor<T>, StateError> {
        self.declare(key, key.initial())
    }

    /// Register an untyped observer on an already declared slot.
    pub fn observe(
        &self,
        path: &str,
        observer: impl Fn() + 'static,
    ) -> Result<Subscription, StateError> {
        let slots = self.inner.slots.borrow();
        let entry = slots
            .get(path)
            .ok_or_else(|| StateError::UnknownKey(path.to_string()))?;
        Ok(ObserverList::subscribe(&entry.observers, Rc::new(observer)))
    }

    /// Run `f` and return the set of slot paths it read.
    ///
    /// Calls nest: reads inside an inner `track` are attributed to the inner
    /// call only.
    pub fn track<R>(&self, f: impl FnOnce() -> R) -> (R, BTreeSet<&'static str>) {
        self.inner.reads.frames.borrow_mut().push(BTreeSet::new());
        let out = f();
        let reads = self
            .inner
            .reads
            .frames
            .borrow_mut()
            .pop()
            .unwrap_or_default();
        (out, reads)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.inner.slots.borrow().contains_key(path)
    }

    /// Declared slot paths, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.inner.slots.borrow().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of live observers on `path` (zero for undeclared paths).
    pub fn observer_count(&self, path: &str) -> usize {
        self.inner
            .slots
            .borrow()
            .get(path)
            .map_or(0, |entry| entry.observers.len())
    }
}

impl fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

use super::registry::{StateRegistry, Subscription};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Memoized output of a render function, kept current by observation.
///
/// The function runs under [`StateRegistry::track`]; the node subscribes to
/// every slot it read. A `set` on any of those slots re-runs the function
/// synchronously and re-subscribes to the new read set, so slots that the
/// latest run no longer reads stop triggering it.
///
/// The cached value is replaced during re-runs: do not trigger writes while
/// holding the borrow given to [`with`](Self::with). Clone what you need
/// first.
pub struct Computed<V> {
    node: Rc<Node<V>>,
}

struct Node<V> {
    registry: StateRegistry,
    compute: Box<dyn Fn() -> V>,
    value: RefCell<V>,
    revision: Cell<u64>,
    watched: RefCell<Vec<(&'static str, Subscription)>>,
}

impl<V: 'static> Computed<V> {
    pub fn new(registry: &StateRegistry, compute: impl Fn() -> V + 'static) -> Self {
        let (value, reads) = registry.track(&compute);
        let node = Rc::new(Node {
            registry: registry.clone(),
            compute: Box::new(compute),
            value: RefCell::new(value),
            revision: Cell::new(0),
            watched: RefCell::default(),
        });
        Node::watch(&node, reads);
        Self { node }
    }

    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.node.value.borrow())
    }

    pub fn get(&self) -> V
    where
        V: Clone,
    {
        self.with(V::clone)
    }

    /// Incremented on every re-run.
    pub fn revision(&self) -> u64 {
        self.node.revision.get()
    }

    /// Re-run now, for changes the registry cannot see.
    pub fn invalidate(&self) {
        Node::refresh(&self.node);
    }

    /// Slot paths the latest run read.
    pub fn watched(&self) -> Vec<&'static str> {
        self.node
            .watched
            .borrow()
            .iter()
            .map(|(path, _)| *path)
            .collect()
    }
}

impl<V: 'static> Node<V> {
    fn refresh(node: &Rc<Self>) {
        let (value, reads) = node.registry.track(|| (node.compute)());
        drop(node.value.replace(value));
        node.revision.set(node.revision.get() + 1);
        Self::watch(node, reads);
    }

    fn watch(node: &Rc<Self>, reads: BTreeSet<&'static str>) {
        let mut watched = Vec::with_capacity(reads.len());
        for path in reads {
            let weak = Rc::downgrade(node);
            let observer = move || {
                if let Some(node) = weak.upgrade() {
                    Node::refresh(&node);
                }
            };
            match node.registry.observe(path, observer) {
                Ok(subscription) => watched.push((path, subscription)),
                Err(err) => warn!(%err, "computed value cannot watch slot"),
            }
        }
        // Replacing drops the previous subscriptions.
        drop(node.watched.replace(watched));
    }
}

impl<V: fmt::Debug> fmt::Debug for Computed<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("revision", &self.node.revision.get())
            .field("value", &*self.node.value.borrow())
            .finish()
    }
}

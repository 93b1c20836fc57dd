//! Host composition.
//!
//! A [`Host`] owns an ordered list of destinations, one applet per
//! navigation tag, and renders the applet whose tag matches the current
//! selection above a tab strip. The rendered tree is a [`Computed`] value:
//! it re-renders synchronously whenever the selection or any slot the active
//! applet read is written.
//!
//! Configuration mistakes (duplicate applet ids, duplicate tags, no
//! destinations) fail [`HostBuilder::build`] before anything renders. A
//! selection that matches no destination falls back to the key's initial tag
//! and is logged.

use crate::applet::Applet;
use crate::state::{Accessor, Binding, Computed, StateError, StateKey, StateRegistry};
use crate::view::{SelectCallback, TabLabel, TabStrip, ViewNode, ViewTree};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("duplicate applet id `{0}`")]
    DuplicateAppletId(String),
    #[error("navigation tag {0} is bound to more than one applet")]
    DuplicateDestination(String),
    #[error("host has no destinations")]
    NoDestinations,
    #[error(transparent)]
    State(#[from] StateError),
}

/// Tag type naming a destination.
pub trait NavTag: Copy + Eq + fmt::Debug + 'static {}

impl<T: Copy + Eq + fmt::Debug + 'static> NavTag for T {}

/// `(label, icon, tag)` triple consumed by navigation chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem<D> {
    pub label: String,
    pub icon: String,
    pub tag: D,
}

struct Destination<D> {
    item: TabItem<D>,
    applet: Box<dyn Applet>,
}

fn check_unique<D: NavTag>(
    existing: &[Destination<D>],
    tag: D,
    applet: &dyn Applet,
) -> Result<(), HostError> {
    if existing.iter().any(|d| d.applet.id() == applet.id()) {
        return Err(HostError::DuplicateAppletId(applet.id().to_string()));
    }
    if existing.iter().any(|d| d.item.tag == tag) {
        return Err(HostError::DuplicateDestination(format!("{:?}", tag)));
    }
    Ok(())
}

pub struct HostBuilder<D> {
    registry: StateRegistry,
    key: StateKey<D>,
    destinations: Vec<Destination<D>>,
}

impl<D: NavTag> HostBuilder<D> {
    pub fn new(registry: &StateRegistry, key: StateKey<D>) -> Self {
        Self {
            registry: registry.clone(),
            key,
            destinations: Vec::new(),
        }
    }

    /// Append a destination. Order is tab order.
    pub fn destination(
        mut self,
        tag: D,
        label: impl Into<String>,
        icon: impl Into<String>,
        applet: impl Applet + 'static,
    ) -> Self {
        self.destinations.push(Destination {
            item: TabItem {
                label: label.into(),
                icon: icon.into(),
                tag,
            },
            applet: Box::new(applet),
        });
        self
    }

    pub fn build(self) -> Result<Host<D>, HostError> {
        let mut checked: Vec<Destination<D>> = Vec::with_capacity(self.destinations.len());
        for destination in self.destinations {
            check_unique(&checked, destination.item.tag, destination.applet.as_ref())?;
            checked.push(destination);
        }
        if checked.is_empty() {
            return Err(HostError::NoDestinations);
        }

        let selection = self.registry.state(&self.key)?;
        Ok(Host::new(&self.registry, self.key.initial(), selection, checked))
    }
}

pub struct Host<D: NavTag> {
    destinations: Rc<RefCell<Vec<Destination<D>>>>,
    selection: Accessor<D>,
    initial: D,
    view: Computed<ViewTree>,
}

impl<D: NavTag> Host<D> {
    fn new(
        registry: &StateRegistry,
        initial: D,
        selection: Accessor<D>,
        destinations: Vec<Destination<D>>,
    ) -> Self {
        let destinations = Rc::new(RefCell::new(destinations));
        let view = {
            let destinations = Rc::clone(&destinations);
            let selection = selection.clone();
            Computed::new(registry, move || {
                compose(&destinations.borrow(), &selection, initial)
            })
        };
        debug!(
            destinations = destinations.borrow().len(),
            initial = ?initial,
            "host composed"
        );
        Self {
            destinations,
            selection,
            initial,
            view,
        }
    }

    /// Add a destination after start-up, with the same checks as the builder.
    pub fn register(
        &self,
        tag: D,
        label: impl Into<String>,
        icon: impl Into<String>,
        applet: impl Applet + 'static,
    ) -> Result<(), HostError> {
        {
            let mut destinations = self.destinations.borrow_mut();
            check_unique(&destinations, tag, &applet)?;
            debug!(id = applet.id(), tag = ?tag, "registered applet");
            destinations.push(Destination {
                item: TabItem {
                    label: label.into(),
                    icon: icon.into(),
                    tag,
                },
                applet: Box::new(applet),
            });
        }
        self.view.invalidate();
        Ok(())
    }

    /// Current tree. Callbacks inside it stay valid after later re-renders.
    pub fn view(&self) -> ViewTree {
        self.view.get()
    }

    /// Incremented on every re-render.
    pub fn revision(&self) -> u64 {
        self.view.revision()
    }

    pub fn selection(&self) -> Binding<D> {
        self.selection.as_binding()
    }

    /// Raw selection, which may name no destination.
    pub fn selected(&self) -> D {
        self.selection.get()
    }

    pub fn initial(&self) -> D {
        self.initial
    }

    /// Id of the applet currently rendered.
    pub fn active_id(&self) -> String {
        let destinations = self.destinations.borrow();
        let index = resolve(&destinations, self.selection.get(), self.initial);
        destinations[index].applet.id().to_string()
    }

    pub fn tab_items(&self) -> Vec<TabItem<D>> {
        self.destinations
            .borrow()
            .iter()
            .map(|d| d.item.clone())
            .collect()
    }

    pub fn applet_ids(&self) -> Vec<String> {
        self.destinations
            .borrow()
            .iter()
            .map(|d| d.applet.id().to_string())
            .collect()
    }
}

impl<D: NavTag> fmt::Debug for Host<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("applets", &self.applet_ids())
            .field("initial", &self.initial)
            .field("revision", &self.revision())
            .finish()
    }
}

/// Index of the destination to render. Destinations are never empty.
fn resolve<D: NavTag>(destinations: &[Destination<D>], selected: D, initial: D) -> usize {
    let position = |tag: D| destinations.iter().position(|d| d.item.tag == tag);
    if let Some(index) = position(selected) {
        return index;
    }
    warn!(
        selected = ?selected,
        fallback = ?initial,
        "navigation selection matches no destination, falling back"
    );
    position(initial).unwrap_or(0)
}

fn compose<D: NavTag>(
    destinations: &[Destination<D>],
    selection: &Accessor<D>,
    initial: D,
) -> ViewTree {
    let index = resolve(destinations, selection.get(), initial);
    let content = destinations[index].applet.render();

    let items = destinations
        .iter()
        .map(|d| TabLabel {
            label: d.item.label.clone(),
            icon: d.item.icon.clone(),
        })
        .collect();
    let tags: Vec<D> = destinations.iter().map(|d| d.item.tag).collect();
    let binding = selection.as_binding();
    let on_select = SelectCallback::new(move |i| {
        if let Some(tag) = tags.get(i) {
            binding.set(*tag);
        }
    });

    ViewNode::vstack(vec![
        content,
        ViewNode::TabStrip(TabStrip {
            items,
            selected: index,
            on_select,
        }),
    ])
}

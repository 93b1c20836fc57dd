//! The contract every pluggable applet implements.
//!
//! An applet is a stateless descriptor over registry-owned state: it holds
//! [`Accessor`](crate::state::Accessor)s obtained at construction and renders
//! a [`ViewTree`] from them. Applets never import each other; shared state
//! flows through keys exported by an `interface` module.

use crate::view::ViewTree;
use std::fmt;

/// A pluggable UI module.
///
/// # Invariants
///
/// - `id()` is unique across every applet registered with one host and stable
///   across launches. The host rejects duplicates at registration.
/// - `render()` only reads state. Writes belong in the callbacks of the nodes
///   it returns. The host calls it again whenever a slot it read changes.
pub trait Applet {
    fn id(&self) -> &str;

    /// Display label. Not required to be unique.
    fn title(&self) -> &str;

    fn render(&self) -> ViewTree;
}

impl fmt::Debug for dyn Applet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Applet")
            .field("id", &self.id())
            .field("title", &self.title())
            .finish()
    }
}

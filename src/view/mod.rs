//! Declarative view trees.
//!
//! Applets and the host describe their UI as a [`ViewTree`] instead of
//! drawing. The terminal renderer in [`crate::ui`] paints it; tests inspect
//! it directly. Interactive nodes carry callbacks that run writes against
//! the state registry when the renderer's input layer triggers them.

use std::fmt;
use std::rc::Rc;

/// Root of a rendered tree.
pub type ViewTree = ViewNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Headline,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub enum ViewNode {
    Text { content: String, style: TextStyle },
    Button { label: String, on_press: Callback },
    Stack { axis: Axis, children: Vec<ViewNode> },
    Spacer,
    TabStrip(TabStrip),
}

/// Navigation control: one label per destination plus the selected index.
#[derive(Debug, Clone)]
pub struct TabStrip {
    pub items: Vec<TabLabel>,
    pub selected: usize,
    pub on_select: SelectCallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub label: String,
    pub icon: String,
}

#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

#[derive(Clone)]
pub struct SelectCallback(Rc<dyn Fn(usize)>);

impl SelectCallback {
    pub fn new(f: impl Fn(usize) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, index: usize) {
        (self.0)(index)
    }
}

impl fmt::Debug for SelectCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectCallback(..)")
    }
}

impl ViewNode {
    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        ViewNode::Text {
            content: content.into(),
            style,
        }
    }

    pub fn button(label: impl Into<String>, on_press: impl Fn() + 'static) -> Self {
        ViewNode::Button {
            label: label.into(),
            on_press: Callback::new(on_press),
        }
    }

    pub fn vstack(children: Vec<ViewNode>) -> Self {
        ViewNode::Stack {
            axis: Axis::Vertical,
            children,
        }
    }

    pub fn hstack(children: Vec<ViewNode>) -> Self {
        ViewNode::Stack {
            axis: Axis::Horizontal,
            children,
        }
    }

    /// Text contents in depth-first order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let ViewNode::Text { content, .. } = node {
                out.push(content.as_str());
            }
        });
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| *text == needle)
    }

    /// Buttons in depth-first order. This is also focus order.
    pub fn buttons(&self) -> Vec<(&str, &Callback)> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let ViewNode::Button { label, on_press } = node {
                out.push((label.as_str(), on_press));
            }
        });
        out
    }

    pub fn find_button(&self, label: &str) -> Option<&Callback> {
        self.buttons()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, callback)| callback)
    }

    /// First tab strip in the tree.
    pub fn tab_strip(&self) -> Option<&TabStrip> {
        let mut found = None;
        self.walk(&mut |node| {
            if let ViewNode::TabStrip(strip) = node {
                found.get_or_insert(strip);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        if let ViewNode::Stack { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample(hits: Rc<Cell<u32>>) -> ViewTree {
        ViewNode::vstack(vec![
            ViewNode::text("Title", TextStyle::Title),
            ViewNode::hstack(vec![
                ViewNode::text("left", TextStyle::Body),
                ViewNode::Spacer,
                ViewNode::button("Go", move || hits.set(hits.get() + 1)),
            ]),
            ViewNode::TabStrip(TabStrip {
                items: vec![TabLabel {
                    label: "Home".into(),
                    icon: "house".into(),
                }],
                selected: 0,
                on_select: SelectCallback::new(|_| {}),
            }),
        ])
    }

    #[test]
    fn test_texts_depth_first() {
        let tree = sample(Rc::default());
        assert_eq!(tree.texts(), vec!["Title", "left"]);
        assert!(tree.contains_text("left"));
        assert!(!tree.contains_text("lef"));
    }

    #[test]
    fn test_find_and_press_button() {
        let hits = Rc::new(Cell::new(0));
        let tree = sample(Rc::clone(&hits));
        assert_eq!(tree.buttons().len(), 1);
        tree.find_button("Go").unwrap().call();
        assert_eq!(hits.get(), 1);
        assert!(tree.find_button("Stop").is_none());
    }

    #[test]
    fn test_tab_strip_lookup() {
        let tree = sample(Rc::default());
        let strip = tree.tab_strip().unwrap();
        assert_eq!(strip.items[0].label, "Home");
        assert!(ViewNode::Spacer.tab_strip().is_none());
    }
}

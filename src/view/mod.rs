//! Seams between the catalog logic and the host view tree.
//!
//! The logic never touches widgets directly: the grid and the filter bar are
//! reached through [`GridSurface`] and [`FilterSurface`], which the GTK
//! widgets implement and the tests replace with recording doubles.

mod filter_bar;
mod grid;

pub use self::filter_bar::{CategoryFilterBar, DEFAULT_ALL_LABEL};
pub use self::grid::{GridView, format_count};

use crate::card::Card;
use crate::models::Selection;

use std::cell::RefCell;
use std::rc::Rc;

pub trait GridSurface {
    /// Drops every card currently shown and attaches `cards` in one batch.
    fn replace_cards(&self, cards: Vec<Card>);

    fn set_empty_visible(&self, visible: bool);

    /// Updates the count display. Hosts without one ignore the call.
    fn set_count_text(&self, text: &str);
}

/// A category button to append to the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: String,
    pub label: String,
    pub count: usize,
}

pub trait FilterSurface {
    /// Text of the pre-existing "All" button, `None` when the host has none.
    fn all_button_label(&self) -> Option<String>;

    fn decorate_all_button(&self, label: &str, count: usize);

    fn append_buttons(&self, buttons: Vec<FilterButton>);

    /// Markers of every button in display order, "All" included.
    fn button_markers(&self) -> Vec<Selection>;

    fn set_button_active(&self, index: usize, active: bool);
}

/// A node of the host view tree that may carry a category marker.
pub trait MarkerNode: Sized {
    fn parent_node(&self) -> Option<Self>;

    fn marker(&self) -> Option<Selection>;
}

/// Category marker of `node` or of its nearest ancestor that has one.
pub fn closest_marker<N: MarkerNode>(node: N) -> Option<Selection> {
    let mut current = Some(node);
    while let Some(node) = current {
        if let Some(marker) = node.marker() {
            return Some(marker);
        }
        current = node.parent_node();
    }
    None
}

type ClickHandler = Rc<dyn Fn(Option<Selection>)>;

/// Hands the category resolved for an activated node to every connected
/// handler.
#[derive(Default)]
pub struct ClickRouter {
    handlers: RefCell<Vec<ClickHandler>>,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect<F>(&self, handler: F)
    where
        F: Fn(Option<Selection>) + 'static,
    {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    pub fn route<N: MarkerNode>(&self, node: N) {
        let marker = closest_marker(node);
        // Handlers may connect further handlers while running.
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(marker.clone());
        }
    }
}

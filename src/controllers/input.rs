use crate::filter_state::FilterState;
use crate::models::Selection;
use crate::query_engine::QueryEngine;
use crate::scheduler::{Debouncer, Scheduler};
use crate::view::{CategoryFilterBar, FilterSurface, GridSurface, GridView};

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

struct State<G, F, S: Scheduler> {
    filter: RefCell<FilterState>,
    engine: QueryEngine<'static>,
    grid: GridView<G>,
    filter_bar: CategoryFilterBar<F>,
    debouncer: Debouncer<S>,
}

pub struct WeakInput<G, F, S: Scheduler> {
    state: Weak<State<G, F, S>>
}

impl<G, F, S> WeakInput<G, F, S>
where
    G: GridSurface + 'static,
    F: FilterSurface + 'static,
    S: Scheduler + 'static,
{
    pub fn upgrade(&self) -> Option<Input<G, F, S>> {
        self.state.upgrade().map(|state| Input { state })
    }
}

/// Turns category clicks and search keystrokes into filter state changes,
/// then recomputes and re-renders the grid.
pub struct Input<G, F, S: Scheduler> {
    state: Rc<State<G, F, S>>
}

impl<G, F, S: Scheduler> Clone for Input<G, F, S> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<G, F, S> Input<G, F, S>
where
    G: GridSurface + 'static,
    F: FilterSurface + 'static,
    S: Scheduler + 'static,
{

    pub fn new(
        engine: QueryEngine<'static>,
        grid: GridView<G>,
        filter_bar: CategoryFilterBar<F>,
        debouncer: Debouncer<S>,
    ) -> Self {
        let state = State {
            filter: RefCell::new(FilterState::default()),
            engine,
            grid,
            filter_bar,
            debouncer,
        };

        Self { state: Rc::new(state) }
    }

    pub fn filter_state(&self) -> FilterState {
        self.state.filter.borrow().clone()
    }

    /// Handles a click inside the filter bar. `marker` is the category of the
    /// nearest button around the click, if any.
    ///
    /// Returns whether the grid was re-rendered.
    pub fn handle_category_click(&self, marker: Option<Selection>) -> bool {
        let Some(next) = marker else { return false };

        if self.state.filter.borrow().category == next {
            return false;
        }

        tracing::debug!(category = %next, "category selected");
        self.state.filter.borrow_mut().category = next.clone();
        self.state.filter_bar.set_active(&next);
        self.apply_filters();
        true
    }

    /// Handles one input event of the search field. The value only reaches
    /// the filter state once the field has been quiet for [`SEARCH_DEBOUNCE`].
    pub fn handle_search_input(&self, value: impl Into<String>) {
        let value = value.into();
        let this_weak = self.downgrade();
        self.state.debouncer.call(move || {
            if let Some(this) = this_weak.upgrade() {
                this.commit_search(value);
            }
        });
    }

    fn commit_search(&self, value: String) {
        tracing::debug!(search = %value, "search committed");
        self.state.filter.borrow_mut().search = value;
        self.apply_filters();
    }

    /// Recomputes the matches for the current filter state and renders them.
    /// Returns the number of matching courses.
    pub fn apply_filters(&self) -> usize {
        let filter = self.state.filter.borrow();
        let courses = self.state.engine.apply(&filter);
        self.state.grid.render(&courses, &filter.search);
        courses.len()
    }

    pub fn downgrade(&self) -> WeakInput<G, F, S> {
        let state = Rc::downgrade(&self.state);
        WeakInput { state }
    }

}

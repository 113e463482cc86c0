use crate::category_index::CategoryCounts;
use crate::controllers::{InputController, SEARCH_DEBOUNCE};
use crate::filter_state::FilterState;
use crate::query_engine::QueryEngine;
use crate::repository::Repository;
use crate::scheduler::{Debouncer, Scheduler};
use crate::view::{CategoryFilterBar, FilterSurface, GridSurface, GridView};

/// Host view elements the browser attaches to.
pub struct Anchors<G, F> {
    pub grid: Option<G>,
    pub filters: F,
}

/// Populates the filter bar, renders the initial grid and returns the
/// controller that the host wires its events to.
///
/// Returns `None` without touching the host when it has no grid.
pub fn mount<G, F, S>(
    repository: Repository<'static>,
    anchors: Anchors<G, F>,
    scheduler: S,
) -> Option<InputController<G, F, S>>
where
    G: GridSurface + 'static,
    F: FilterSurface + 'static,
    S: Scheduler + 'static,
{
    let Some(grid) = anchors.grid else {
        tracing::debug!("no grid in the host view, catalog browser not mounted");
        return None;
    };

    let counts = CategoryCounts::from_courses(repository.courses());
    let filter_bar = CategoryFilterBar::new(anchors.filters, &counts);
    filter_bar.set_active(&FilterState::default().category);

    let input = InputController::new(
        QueryEngine::new(repository),
        GridView::new(grid, repository),
        filter_bar,
        Debouncer::new(scheduler, SEARCH_DEBOUNCE),
    );

    let shown = input.apply_filters();
    tracing::info!(
        courses = counts.total(),
        categories = counts.category_count(),
        shown,
        "catalog browser mounted"
    );

    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use crate::models::Selection;
    use crate::testing::{ManualScheduler, RecordingFilters, RecordingGrid};
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_render_shows_the_whole_catalog() {
        let grid = RecordingGrid::new();
        let filters = RecordingFilters::with_all_button(" All ");
        let anchors = Anchors { grid: Some(grid.clone()), filters: filters.clone() };

        let input = mount(Repository::new(&APP_CATALOG), anchors, ManualScheduler::new());

        assert!(input.is_some());
        let log = grid.log();
        assert_eq!(log.renders, 1);
        assert_eq!(log.cards.len(), 9);
        assert_eq!(log.count.as_deref(), Some("9 courses"));
        assert!(!log.empty_visible);
        assert!(log.cards.iter().all(|card| !card.has_highlights()));

        assert_eq!(filters.buttons().len(), 6);
        assert_eq!(filters.buttons()[0].label, "All");
        assert_eq!(filters.active_markers(), vec![Selection::All]);
    }

    #[test]
    fn missing_grid_skips_initialisation() {
        let filters = RecordingFilters::with_all_button("All");
        let anchors: Anchors<RecordingGrid, _> = Anchors { grid: None, filters: filters.clone() };

        let input = mount(Repository::new(&APP_CATALOG), anchors, ManualScheduler::new());

        assert!(input.is_none());
        assert_eq!(filters.buttons().len(), 1);
        assert_eq!(filters.buttons()[0].count, None);
    }
}

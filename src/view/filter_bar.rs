use super::{FilterButton, FilterSurface};
use crate::category_index::CategoryCounts;
use crate::models::Selection;

pub const DEFAULT_ALL_LABEL: &str = "All";

/// Category buttons with their badges. The active category itself lives in
/// the filter state; this only mirrors it on screen.
pub struct CategoryFilterBar<F> {
    surface: F,
}

impl<F: FilterSurface> CategoryFilterBar<F> {

    pub fn new(surface: F, counts: &CategoryCounts) -> Self {
        let this = Self { surface };
        this.decorate_all_button(counts);
        this.append_category_buttons(counts);
        this
    }

    fn decorate_all_button(&self, counts: &CategoryCounts) {
        if let Some(label) = self.surface.all_button_label() {
            let label = match label.trim() {
                "" => DEFAULT_ALL_LABEL,
                trimmed => trimmed,
            };
            self.surface.decorate_all_button(label, counts.total());
        }
    }

    fn append_category_buttons(&self, counts: &CategoryCounts) {
        let buttons = counts
            .categories()
            .map(|(category, count)| FilterButton {
                category: category.to_string(),
                label: category.to_string(),
                count,
            })
            .collect();

        self.surface.append_buttons(buttons);
    }

    /// Marks exactly the buttons carrying `selection` as active.
    pub fn set_active(&self, selection: &Selection) {
        for (index, marker) in self.surface.button_markers().iter().enumerate() {
            self.surface.set_button_active(index, marker == selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use crate::testing::RecordingFilters;
    use pretty_assertions::assert_eq;

    fn counts() -> CategoryCounts {
        CategoryCounts::from_courses(APP_CATALOG.courses)
    }

    #[test]
    fn appends_one_button_per_category_in_first_seen_order() {
        let filters = RecordingFilters::with_all_button("All");
        CategoryFilterBar::new(filters.clone(), &counts());

        let buttons = filters.buttons();
        let summary: Vec<_> = buttons
            .iter()
            .map(|button| (button.marker.clone(), button.label.clone(), button.count))
            .collect();

        assert_eq!(summary, vec![
            (Selection::All, "All".to_string(), Some(9)),
            (Selection::category("Marketing"), "Marketing".to_string(), Some(2)),
            (Selection::category("Management"), "Management".to_string(), Some(2)),
            (Selection::category("HR & Recruiting"), "HR & Recruiting".to_string(), Some(2)),
            (Selection::category("Design"), "Design".to_string(), Some(2)),
            (Selection::category("Development"), "Development".to_string(), Some(1)),
        ]);
    }

    #[test]
    fn all_button_keeps_its_trimmed_label() {
        let filters = RecordingFilters::with_all_button("\n   Every course  \n");
        CategoryFilterBar::new(filters.clone(), &counts());
        assert_eq!(filters.buttons()[0].label, "Every course");
    }

    #[test]
    fn blank_all_button_label_falls_back() {
        let filters = RecordingFilters::with_all_button("   ");
        CategoryFilterBar::new(filters.clone(), &counts());
        assert_eq!(filters.buttons()[0].label, DEFAULT_ALL_LABEL);
    }

    #[test]
    fn missing_all_button_is_not_recreated() {
        let filters = RecordingFilters::without_all_button();
        CategoryFilterBar::new(filters.clone(), &counts());

        let markers: Vec<_> = filters.buttons().iter().map(|button| button.marker.clone()).collect();
        assert_eq!(markers.len(), 5);
        assert!(!markers.contains(&Selection::All));
    }

    #[test]
    fn set_active_marks_exactly_one_button() {
        let filters = RecordingFilters::with_all_button("All");
        let bar = CategoryFilterBar::new(filters.clone(), &counts());

        bar.set_active(&Selection::All);
        assert_eq!(filters.active_markers(), vec![Selection::All]);

        bar.set_active(&Selection::category("Design"));
        assert_eq!(filters.active_markers(), vec![Selection::category("Design")]);

        bar.set_active(&Selection::category("Cooking"));
        assert!(filters.active_markers().is_empty());
    }
}

use super::models::{Course, Selection};
use super::ordered_map::OrderedMap;

/// Number of courses per category, plus the `All` total.
///
/// Named categories keep the order in which they first appear in the store.
#[derive(Debug, Clone)]
pub struct CategoryCounts {
    counts: OrderedMap<Selection, usize>,
}

impl CategoryCounts {

    pub fn from_courses(courses: &[Course]) -> Self {
        let mut counts = OrderedMap::new();
        counts.insert(Selection::All, courses.len());

        for course in courses {
            *counts.get_or_default(Selection::category(course.category)) += 1;
        }

        Self { counts }
    }

    pub fn count(&self, selection: &Selection) -> usize {
        self.counts.get(selection).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.count(&Selection::All)
    }

    /// Distinct categories with their counts, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().filter_map(|(selection, &count)| match selection {
            Selection::All => None,
            Selection::Category(name) => Some((name.as_str(), count)),
        })
    }

    pub const fn category_count(&self) -> usize {
        self.counts.len() - 1
    }

}

use super::GridSurface;
use crate::card::Card;
use crate::models::Course;
use crate::repository::Repository;

pub fn format_count(count: usize) -> String {
    format!("{count} courses")
}

/// Puts query results on screen.
pub struct GridView<G> {
    surface: G,
    repository: Repository<'static>,
}

impl<G: GridSurface> GridView<G> {

    pub const fn new(surface: G, repository: Repository<'static>) -> Self {
        Self { surface, repository }
    }

    /// Replaces the whole grid with `courses`, highlighting `search` in titles.
    pub fn render(&self, courses: &[&Course], search: &str) {
        if courses.is_empty() {
            self.surface.replace_cards(Vec::new());
            self.surface.set_empty_visible(true);
            self.surface.set_count_text(&format_count(0));
            return;
        }

        self.surface.set_empty_visible(false);

        let cards = courses
            .iter()
            .map(|course| Card::render(course, self.repository.theme_for(course.category), search))
            .collect();

        self.surface.replace_cards(cards);
        self.surface.set_count_text(&format_count(courses.len()));
        tracing::trace!(count = courses.len(), "grid rendered");
    }
}

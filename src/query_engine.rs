use crate::filter_state::FilterState;
use crate::models::Course;
use crate::repository::Repository;
use std::rc::Rc;

struct QueryIndex<'a> {
    repository: Repository<'a>,
    haystacks: Vec<String>,
}

/// Stable category + substring filter over the catalog store.
///
/// Lower-cased search texts are built once; the store never changes.
#[derive(Clone)]
pub struct QueryEngine<'a> {
    index: Rc<QueryIndex<'a>>
}

impl<'a> QueryEngine<'a> {

    fn normalize_text(text: &str) -> String {
        text.trim().to_lowercase()
    }

    fn build_haystacks(repository: Repository<'_>) -> Vec<String> {
        repository
            .courses()
            .iter()
            .map(|course| course.search_text().to_lowercase())
            .collect()
    }

    pub fn new(repository: Repository<'a>) -> Self {
        let haystacks = Self::build_haystacks(repository);
        let index = Rc::new(QueryIndex {
            repository,
            haystacks,
        });

        Self { index }
    }

    /// Courses matching `state`, in store order.
    pub fn apply(&self, state: &FilterState) -> Vec<&'static Course> {
        let query = Self::normalize_text(&state.search);
        let courses = self.index.repository.courses();

        courses
            .iter()
            .zip(&self.index.haystacks)
            .filter(|(course, haystack)| {
                let matches_category = state.category.matches(course.category);
                let matches_search = query.is_empty() || haystack.contains(&query);
                matches_category && matches_search
            })
            .map(|(course, _)| course)
            .collect()
    }
}

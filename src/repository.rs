use super::models::{Catalog, Course};

/// Read-only handle on the catalog store.
#[derive(Debug, Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl <'a> Repository <'a> {

    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub const fn courses(&self) -> &'static [Course] {
        self.catalog.courses
    }

    /// Style class for a category badge, `None` for categories without a theme.
    pub fn theme_for(&self, category: &str) -> Option<&'static str> {
        self.catalog.themes.get(category).copied()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use pretty_assertions::assert_eq;

    #[test]
    fn exposes_courses_in_source_order() {
        let repository = Repository::new(&APP_CATALOG);
        let ids: Vec<_> = repository.courses().iter().map(|course| course.id).collect();
        assert_eq!(ids, vec![
            "google-ads",
            "product-management",
            "hr-analytics",
            "brand-communications",
            "graphic-design",
            "business-development",
            "architecture",
            "hr-selection",
            "ux-human-centered",
        ]);
    }

    #[test]
    fn looks_up_category_themes() {
        let repository = Repository::new(&APP_CATALOG);
        assert_eq!(repository.theme_for("HR & Recruiting"), Some("card__category--hr"));
        assert_eq!(repository.theme_for("Marketing"), Some("card__category--marketing"));
        assert_eq!(repository.theme_for("Cooking"), None);
    }
}

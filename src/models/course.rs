#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub mentor: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

impl Course {
    /// Text the free-text search runs against: title and mentor, one space apart.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{title} {mentor}", title = self.title, mentor = self.mentor)
    }
}

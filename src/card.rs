use crate::models::Course;
use regex::RegexBuilder;

pub const CATEGORY_CSS_CLASS: &str = "card__category";

/// Piece of a title, emphasised when it matched the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSegment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

impl<'a> TitleSegment<'a> {
    const fn plain(text: &'a str) -> Self {
        Self { text, highlighted: false }
    }

    const fn highlighted(text: &'a str) -> Self {
        Self { text, highlighted: true }
    }
}

/// Everything needed to show one course in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: &'static str,
    pub category: &'static str,
    pub category_class: Option<&'static str>,
    pub title: &'static str,
    pub title_segments: Vec<TitleSegment<'static>>,
    pub price: &'static str,
    pub mentor_line: String,
    pub image: &'static str,
}

impl Card {
    /// Builds the card for `course`, highlighting `search` (raw, as typed)
    /// inside the title.
    pub fn render(course: &Course, category_class: Option<&'static str>, search: &str) -> Self {
        Self {
            id: course.id,
            category: course.category,
            category_class,
            title: course.title,
            title_segments: highlight(course.title, search),
            price: course.price,
            mentor_line: format!("by {mentor}", mentor = course.mentor),
            image: course.image,
        }
    }

    pub fn category_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![CATEGORY_CSS_CLASS];
        classes.extend(self.category_class);
        classes
    }

    pub fn has_highlights(&self) -> bool {
        self.title_segments.iter().any(|segment| segment.highlighted)
    }
}

/// Splits `text` around every case-insensitive occurrence of `query`. The
/// query is matched literally; an empty query leaves `text` whole.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<TitleSegment<'a>> {
    let whole = || if text.is_empty() { Vec::new() } else { vec![TitleSegment::plain(text)] };

    if query.is_empty() {
        return whole();
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return whole();
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in pattern.find_iter(text) {
        if found.start() > last_end {
            segments.push(TitleSegment::plain(&text[last_end..found.start()]));
        }
        segments.push(TitleSegment::highlighted(found.as_str()));
        last_end = found.end();
    }

    if last_end < text.len() {
        segments.push(TitleSegment::plain(&text[last_end..]));
    }
    segments
}

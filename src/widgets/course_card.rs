use crate::prelude::*;
use crate::card::{Card, TitleSegment};

use std::cell::RefCell;

const CARD_CSS_CLASS: &str = "card";
const HIGHLIGHT_OPEN: &str = "<span weight=\"bold\" background=\"#f6d32d\" bgalpha=\"45%\">";
const HIGHLIGHT_CLOSE: &str = "</span>";

mod imp {
    use super::*;

    #[derive(Default, glib::Properties)]
    #[properties(wrapper_type = super::CourseCard)]
    pub struct CourseCard {
        #[property(get, construct_only)]
        pub course_id: RefCell<String>,
        #[property(get, construct_only)]
        pub category: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CourseCard {
        const NAME: &'static str = "CourseCard";
        type Type = super::CourseCard;
        type ParentType = gtk::Box;
    }

    #[glib::derived_properties]
    impl ObjectImpl for CourseCard {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().add_css_class(CARD_CSS_CLASS);
        }
    }

    impl WidgetImpl for CourseCard {}
    impl BoxImpl for CourseCard {}
}

glib::wrapper! {
    pub struct CourseCard(ObjectSubclass<imp::CourseCard>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl CourseCard {

    pub fn from_card(card: &Card) -> Self {
        let this: Self = glib::Object::builder()
            .property("course-id", card.id)
            .property("category", card.category)
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 8)
            .build();

        this.append(&Self::build_photo(card));
        this.append(&Self::build_info(card));
        this
    }

    fn build_photo(card: &Card) -> gtk::Picture {
        let photo = gtk::Picture::for_filename(card.image);
        photo.add_css_class("card__photo");
        photo.set_alternative_text(Some(card.title));
        photo.set_content_fit(gtk::ContentFit::Cover);
        photo
    }

    fn build_info(card: &Card) -> gtk::Box {
        let info = gtk::Box::new(gtk::Orientation::Vertical, 6);
        info.add_css_class("card_info_wrapper");

        let category = gtk::Label::new(Some(card.category));
        category.set_halign(gtk::Align::Start);
        for class in card.category_classes() {
            category.add_css_class(class);
        }

        let title = gtk::Label::new(None);
        title.add_css_class("card__title");
        title.set_markup(&Self::title_markup(&card.title_segments));
        title.set_wrap(true);
        title.set_xalign(0.0);

        let meta_line = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        meta_line.add_css_class("card__meta-line");

        let price = gtk::Label::new(Some(card.price));
        price.add_css_class("card__price");

        let mentor = gtk::Label::new(Some(&card.mentor_line));
        mentor.add_css_class("card__mentor");
        mentor.set_hexpand(true);
        mentor.set_xalign(1.0);

        meta_line.append(&price);
        meta_line.append(&mentor);

        info.append(&category);
        info.append(&title);
        info.append(&meta_line);
        info
    }

    fn title_markup(segments: &[TitleSegment<'_>]) -> String {
        segments
            .iter()
            .map(|segment| {
                let escaped = glib::markup_escape_text(segment.text);
                if segment.highlighted {
                    format!("{HIGHLIGHT_OPEN}{escaped}{HIGHLIGHT_CLOSE}")
                } else {
                    escaped.to_string()
                }
            })
            .collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::highlight;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_markup_escapes_every_segment() {
        let markup = CourseCard::title_markup(&highlight("R&D <lab>", "&"));
        assert_eq!(markup, format!("R{HIGHLIGHT_OPEN}&amp;{HIGHLIGHT_CLOSE}D &lt;lab&gt;"));
    }

    #[test]
    fn title_without_highlights_is_only_escaped() {
        let markup = CourseCard::title_markup(&highlight("Brand Management & PR Communications", ""));
        assert_eq!(markup, "Brand Management &amp; PR Communications");
    }
}

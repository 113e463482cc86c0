use crate::prelude::*;
use crate::card::Card;
use crate::view::GridSurface;
use super::course_card::CourseCard;

use std::cell::OnceCell;

const EMPTY_TITLE: &str = "No courses found";
const EMPTY_DESCRIPTION: &str = "Try another category or a different search.";

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct CourseGrid {
        pub count_label: OnceCell<gtk::Label>,
        pub flow_box: OnceCell<gtk::FlowBox>,
        pub empty_page: OnceCell<adw::StatusPage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CourseGrid {
        const NAME: &'static str = "CourseGrid";
        type Type = super::CourseGrid;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for CourseGrid {
        fn constructed(&self) {
            self.parent_constructed();

            let count_label = gtk::Label::new(None);
            count_label.add_css_class("catalog__count");
            count_label.set_xalign(0.0);

            let flow_box = gtk::FlowBox::new();
            flow_box.add_css_class("catalog__grid");
            flow_box.set_selection_mode(gtk::SelectionMode::None);
            flow_box.set_homogeneous(true);
            flow_box.set_max_children_per_line(3);
            flow_box.set_valign(gtk::Align::Start);

            let scrolled_window = gtk::ScrolledWindow::new();
            scrolled_window.set_hscrollbar_policy(gtk::PolicyType::Never);
            scrolled_window.set_vexpand(true);
            scrolled_window.set_child(Some(&flow_box));

            let empty_page = adw::StatusPage::new();
            empty_page.add_css_class("catalog__empty");
            empty_page.set_icon_name(Some("edit-find-symbolic"));
            empty_page.set_title(EMPTY_TITLE);
            empty_page.set_description(Some(EMPTY_DESCRIPTION));
            empty_page.set_vexpand(true);
            empty_page.set_visible(false);

            let obj = self.obj();
            obj.append(&count_label);
            obj.append(&scrolled_window);
            obj.append(&empty_page);

            self.count_label.get_or_init(|| count_label);
            self.flow_box.get_or_init(|| flow_box);
            self.empty_page.get_or_init(|| empty_page);
        }
    }

    impl WidgetImpl for CourseGrid {}
    impl BoxImpl for CourseGrid {}
}

glib::wrapper! {
    pub struct CourseGrid(ObjectSubclass<imp::CourseGrid>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl CourseGrid {

    pub fn new() -> Self {
        glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 12)
            .build()
    }

    fn remove_all_cards(flow_box: &gtk::FlowBox) {
        while let Some(child) = flow_box.first_child() {
            flow_box.remove(&child);
        }
    }

}

impl Default for CourseGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSurface for CourseGrid {
    fn replace_cards(&self, cards: Vec<Card>) {
        let Some(flow_box) = self.imp().flow_box.get() else { return };

        let widgets: Vec<CourseCard> = cards.iter().map(CourseCard::from_card).collect();

        // hidden while rebuilding so the whole batch lands in one layout pass
        flow_box.set_visible(false);
        Self::remove_all_cards(flow_box);
        for widget in &widgets {
            flow_box.append(widget);
        }
        flow_box.set_visible(!widgets.is_empty());
    }

    fn set_empty_visible(&self, visible: bool) {
        if let Some(empty_page) = self.imp().empty_page.get() {
            empty_page.set_visible(visible);
        }
    }

    fn set_count_text(&self, text: &str) {
        if let Some(count_label) = self.imp().count_label.get() {
            count_label.set_label(text);
        }
    }
}

use crate::prelude::*;
use crate::constants;
use super::course_grid::CourseGrid;
use super::filter_bar::FilterBar;

use gtk::gio::{ActionGroup, ActionMap};
use std::cell::OnceCell;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct Window {
        pub search_entry: OnceCell<gtk::SearchEntry>,
        pub filter_bar: OnceCell<FilterBar>,
        pub course_grid: OnceCell<CourseGrid>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();

            let search_entry = gtk::SearchEntry::new();
            search_entry.set_placeholder_text(Some("Search courses or mentors"));
            search_entry.set_hexpand(true);

            let filter_bar = FilterBar::new();
            let course_grid = CourseGrid::new();

            let content = gtk::Box::new(gtk::Orientation::Vertical, 12);
            content.add_css_class("catalog");
            content.append(&search_entry);
            content.append(&filter_bar);
            content.append(&course_grid);

            let toolbar_view = adw::ToolbarView::new();
            toolbar_view.add_top_bar(&adw::HeaderBar::new());
            toolbar_view.set_content(Some(&content));

            let obj = self.obj();
            obj.set_title(Some(constants::APP_TITLE));
            obj.set_default_size(1080, 760);
            obj.set_content(Some(&toolbar_view));

            self.search_entry.get_or_init(|| search_entry);
            self.filter_bar.get_or_init(|| filter_bar);
            self.course_grid.get_or_init(|| course_grid);
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    pub fn search_entry(&self) -> Option<&gtk::SearchEntry> {
        self.imp().search_entry.get()
    }

    pub fn filter_bar(&self) -> Option<&FilterBar> {
        self.imp().filter_bar.get()
    }

    pub fn course_grid(&self) -> Option<&CourseGrid> {
        self.imp().course_grid.get()
    }

}

use crate::prelude::*;
use crate::models::Selection;

use std::cell::{Cell, OnceCell, RefCell};

const BUTTON_CSS_CLASS: &str = "filters__button";
const ACTIVE_CSS_CLASS: &str = "filters__button--active";

mod imp {
    use super::*;

    #[derive(Default, glib::Properties)]
    #[properties(wrapper_type = super::CategoryButton)]
    pub struct CategoryButton {
        #[property(get, construct_only)]
        pub category: RefCell<String>,
        #[property(get, construct_only)]
        pub is_all: Cell<bool>,

        pub label: OnceCell<gtk::Label>,
        pub badge: OnceCell<gtk::Label>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CategoryButton {
        const NAME: &'static str = "CategoryButton";
        type Type = super::CategoryButton;
        type ParentType = gtk::Button;
    }

    #[glib::derived_properties]
    impl ObjectImpl for CategoryButton {
        fn constructed(&self) {
            self.parent_constructed();

            let content = gtk::Box::new(gtk::Orientation::Horizontal, 6);
            let label = gtk::Label::new(None);
            label.add_css_class("filters__label");
            let badge = gtk::Label::new(None);
            badge.add_css_class("filters__badge");
            badge.set_visible(false);

            content.append(&label);
            content.append(&badge);

            let obj = self.obj();
            obj.set_child(Some(&content));
            obj.add_css_class(BUTTON_CSS_CLASS);

            self.label.get_or_init(|| label);
            self.badge.get_or_init(|| badge);
        }
    }

    impl WidgetImpl for CategoryButton {}
    impl ButtonImpl for CategoryButton {}
}

glib::wrapper! {
    pub struct CategoryButton(ObjectSubclass<imp::CategoryButton>)
        @extends gtk::Button, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl CategoryButton {

    pub fn new(marker: &Selection, label: &str) -> Self {
        let this: Self = glib::Object::builder()
            .property("category", marker.key())
            .property("is-all", marker.is_all())
            .build();

        if let Some(label_widget) = this.imp().label.get() {
            label_widget.set_label(label);
        }
        this
    }

    pub fn marker(&self) -> Selection {
        if self.is_all() {
            Selection::All
        } else {
            Selection::Category(self.category())
        }
    }

    pub fn label_text(&self) -> String {
        self.imp()
            .label
            .get()
            .map(|label| label.label().to_string())
            .unwrap_or_default()
    }

    pub fn decorate(&self, label: &str, count: usize) {
        let implementation = self.imp();
        if let Some(label_widget) = implementation.label.get() {
            label_widget.set_label(label);
        }
        if let Some(badge) = implementation.badge.get() {
            badge.set_label(&count.to_string());
            badge.set_visible(true);
        }
    }

    pub fn set_active(&self, active: bool) {
        if active {
            self.add_css_class(ACTIVE_CSS_CLASS);
        } else {
            self.remove_css_class(ACTIVE_CSS_CLASS);
        }
    }

}

use crate::prelude::*;
use crate::models::Selection;
use crate::view::{ClickRouter, FilterButton, FilterSurface, MarkerNode, DEFAULT_ALL_LABEL};
use super::category_button::CategoryButton;

use std::cell::{Ref, RefCell};

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct FilterBar {
        pub buttons: RefCell<Vec<CategoryButton>>,
        pub clicks: ClickRouter,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for FilterBar {
        const NAME: &'static str = "FilterBar";
        type Type = super::FilterBar;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for FilterBar {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.add_css_class("filters");
            obj.append_button(CategoryButton::new(&Selection::All, DEFAULT_ALL_LABEL));
        }
    }

    impl WidgetImpl for FilterBar {}
    impl BoxImpl for FilterBar {}
}

glib::wrapper! {
    pub struct FilterBar(ObjectSubclass<imp::FilterBar>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl MarkerNode for gtk::Widget {
    fn parent_node(&self) -> Option<Self> {
        WidgetExt::parent(self)
    }

    fn marker(&self) -> Option<Selection> {
        self.downcast_ref::<CategoryButton>().map(CategoryButton::marker)
    }
}

impl FilterBar {

    pub fn new() -> Self {
        glib::Object::builder()
            .property("orientation", gtk::Orientation::Horizontal)
            .property("spacing", 8)
            .build()
    }

    fn append_button(&self, button: CategoryButton) {
        let this_weak = self.downgrade();
        button.connect_clicked(move |button| {
            if let Some(this) = this_weak.upgrade() {
                this.imp().clicks.route(button.clone().upcast::<gtk::Widget>());
            }
        });

        self.append(&button);
        self.imp().buttons.borrow_mut().push(button);
    }

    pub fn buttons(&self) -> Ref<'_, Vec<CategoryButton>> {
        self.imp().buttons.borrow()
    }

    fn all_button(&self) -> Option<CategoryButton> {
        self.buttons().iter().find(|button| button.is_all()).cloned()
    }

    /// Calls `callback` with the category of every button activated inside
    /// the bar, by pointer or keyboard.
    pub fn connect_category_clicked<F>(&self, callback: F)
    where
        F: Fn(Option<Selection>) + 'static,
    {
        self.imp().clicks.connect(callback);
    }
}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSurface for FilterBar {
    fn all_button_label(&self) -> Option<String> {
        self.all_button().map(|button| button.label_text())
    }

    fn decorate_all_button(&self, label: &str, count: usize) {
        if let Some(button) = self.all_button() {
            button.decorate(label, count);
        }
    }

    fn append_buttons(&self, buttons: Vec<FilterButton>) {
        for button in buttons {
            let widget = CategoryButton::new(&Selection::Category(button.category), &button.label);
            widget.decorate(&button.label, button.count);
            self.append_button(widget);
        }
    }

    fn button_markers(&self) -> Vec<Selection> {
        self.buttons().iter().map(CategoryButton::marker).collect()
    }

    fn set_button_active(&self, index: usize, active: bool) {
        if let Some(button) = self.buttons().get(index) {
            button.set_active(active);
        }
    }
}

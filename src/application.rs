use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::browser::{self, Anchors};
use super::constants;
use super::controllers::{ActionsController, InputController};
use super::repository::Repository;
use super::scheduler::GlibScheduler;
use super::widgets::{CourseGrid, FilterBar, Window};

type BrowserController = InputController<CourseGrid, FilterBar, GlibScheduler>;

struct ApplicationState {
    application: adw::Application,
    repository: Repository<'static>,
    browser: RefCell<Option<BrowserController>>,
    actions: RefCell<Option<ActionsController>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let state = Rc::new(ApplicationState {
            application,
            repository,
            browser: RefCell::new(None),
            actions: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            if let Err(error) = this.setup_ui() {
                tracing::error!(error = %error, "failed to build the main window");
            }
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            if let Err(error) = Self::setup_resources() {
                tracing::error!(error = %error, "failed to register application resources");
            }
        });
    }

    fn setup_ui(&self) -> Result<()> {
        let window = Window::new(&self.state.application);
        let filters = window.filter_bar().context("Window has no filter bar")?.clone();

        let anchors = Anchors {
            grid: window.course_grid().cloned(),
            filters,
        };

        if let Some(browser) = browser::mount(self.state.repository, anchors, GlibScheduler) {
            Self::connect_browser_events(&window, &browser);
            self.state.browser.replace(Some(browser));
        }

        let actions = ActionsController::new(self.state.application.clone(), window.clone());
        self.state.actions.replace(Some(actions));

        window.present();
        Ok(())
    }

    fn connect_browser_events(window: &Window, browser: &BrowserController) {
        if let Some(filter_bar) = window.filter_bar() {
            let browser_weak = browser.downgrade();
            filter_bar.connect_category_clicked(move |marker| {
                if let Some(browser) = browser_weak.upgrade() {
                    browser.handle_category_click(marker);
                }
            });
        }

        if let Some(search_entry) = window.search_entry() {
            let browser_weak = browser.downgrade();
            search_entry.connect_changed(move |entry| {
                if let Some(browser) = browser_weak.upgrade() {
                    browser.handle_search_input(entry.text().as_str());
                }
            });
        }
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_data(constants::APP_STYLESHEET);

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        tracing::info!(version = constants::APP_VERSION, id = constants::APP_ID, "starting");

        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

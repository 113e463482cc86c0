use course_catalog::{application, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    application::Application::new().activate()
}

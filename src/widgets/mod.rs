mod category_button;
mod course_card;
mod course_grid;
mod filter_bar;
mod window;

pub use category_button::CategoryButton;
pub use course_card::CourseCard;
pub use course_grid::CourseGrid;
pub use filter_bar::FilterBar;
pub use window::Window;

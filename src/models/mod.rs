mod course;
mod catalog;
mod selection;

pub use self::course::Course;
pub use self::catalog::Catalog;
pub use self::selection::{Selection, ALL_KEY};

mod input;
#[cfg(feature = "ui")]
mod actions;

pub use self::input::{Input as InputController, WeakInput as WeakInputController, SEARCH_DEBOUNCE};
#[cfg(feature = "ui")]
pub use self::actions::Actions as ActionsController;

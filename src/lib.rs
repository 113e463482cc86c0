pub mod browser;
pub mod card;
pub mod category_index;
pub mod constants;
pub mod controllers;
pub mod filter_state;
pub mod models;
mod ordered_map;
pub mod query_engine;
pub mod repository;
pub mod scheduler;
pub mod view;

#[cfg(feature = "ui")]
pub mod application;
#[cfg(feature = "ui")]
pub mod logging;
#[cfg(feature = "ui")]
mod prelude;
#[cfg(feature = "ui")]
pub mod widgets;

#[cfg(test)]
mod testing;

//! Line based front-end: the menu dispatcher, the workflows behind each menu
//! entry, and the genre resolution logic used by "add movie".

mod app;
mod genre_loop;
mod render;
mod resolver;

pub use app::{App, MenuChoice, LIST_LIMIT};
pub use genre_loop::{GenreLoop, StopAnswer};
pub use resolver::{resolve_and_link, Resolution};

//! Application state module

mod app_state;
mod forms;
mod keypress;
mod notification;
mod roster;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use keypress::*;
pub use notification::*;
pub use roster::*;
pub use ui_area::*;

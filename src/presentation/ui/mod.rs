//! UI screens.

mod app;
mod schedule_screen;
mod view_options;

pub use app::App;
pub use schedule_screen::{EMPTY_TEXT, LOADING_TEXT, ScheduleScreen, ScheduleScreenState};
pub use view_options::ViewOptions;

mod refresh_button;
mod session_table;
mod status_bar;

pub use refresh_button::{REFRESH_LABEL, RefreshButton};
pub use session_table::{
    COLUMN_TITLES, SessionTable, SessionTableStyle, TODAY_MARKER, format_display_date,
};
pub use status_bar::{StatusBar, StatusLevel};

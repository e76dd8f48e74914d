//! Training schedule screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, TableState, Widget, Wrap},
};

use crate::domain::keybinding::Action;
use crate::domain::{MountDate, RenderMode, ScheduleError, TrainingSession, ViewState};
use crate::presentation::widgets::{
    RefreshButton, SessionTable, SessionTableStyle, StatusBar, StatusLevel,
};

use super::ViewOptions;

const TITLE: &str = " Training Schedule ";
pub const LOADING_TEXT: &str = "Loading training data...";
pub const EMPTY_TEXT: &str = "No training data available";
const ERROR_PREFIX: &str = "Error loading data: ";

/// State of one mounted schedule view.
pub struct ScheduleScreenState {
    mount_date: MountDate,
    view: ViewState,
    table_state: TableState,
    date_format: String,
    table_style: SessionTableStyle,
    button: RefreshButton,
    accent: Color,
    hints: String,
    button_area: Rect,
}

impl ScheduleScreenState {
    #[must_use]
    pub fn new(mount_date: MountDate, options: &ViewOptions) -> Self {
        Self {
            mount_date,
            view: ViewState::Loading,
            table_state: TableState::default(),
            date_format: options.date_format.clone(),
            table_style: SessionTableStyle::themed(options.accent, options.today),
            button: RefreshButton::new(options.accent),
            accent: options.accent,
            hints: options.keymap.hints().join("  "),
            button_area: Rect::default(),
        }
    }

    #[must_use]
    pub const fn mount_date(&self) -> &MountDate {
        &self.mount_date
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.view.render_mode()
    }

    /// Where the refresh button was last drawn.
    #[must_use]
    pub const fn button_area(&self) -> Rect {
        self.button_area
    }

    /// Applies the load outcome; on success scrolls so today's row is visible.
    pub fn apply_outcome(&mut self, outcome: Result<Vec<TrainingSession>, ScheduleError>) -> bool {
        if !self.view.resolve(outcome) {
            return false;
        }

        if let Some(position) = self
            .view
            .schedule()
            .and_then(|s| s.position_of(&self.mount_date))
        {
            *self.table_state.offset_mut() = position.saturating_sub(1);
        }
        true
    }

    /// Handles scroll actions. Returns false for actions that are not the
    /// screen's business.
    pub fn handle_action(&mut self, action: Action) -> bool {
        let len = self.view.schedule().map_or(0, |s| s.len());
        let offset = self.table_state.offset_mut();

        match action {
            Action::ScrollUp => *offset = offset.saturating_sub(1),
            Action::ScrollDown => *offset = (*offset + 1).min(len.saturating_sub(1)),
            Action::ScrollToTop => *offset = 0,
            Action::ScrollToBottom => *offset = len.saturating_sub(1),
            Action::Quit | Action::Refresh => return false,
        }
        true
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.table_state.offset()
    }

    fn status_bar(&self) -> StatusBar {
        let (left, level) = match &self.view {
            ViewState::Loading => ("Loading…".to_string(), StatusLevel::Info),
            ViewState::Failed(_) => ("Load failed".to_string(), StatusLevel::Error),
            ViewState::Loaded(schedule) => {
                let updated = schedule.loaded_at().format("%H:%M:%S");
                let level = if schedule.is_empty() {
                    StatusLevel::Warning
                } else {
                    StatusLevel::Success
                };
                (
                    format!(
                        "{} sessions · today {} · updated {updated}",
                        schedule.len(),
                        self.mount_date.as_str()
                    ),
                    level,
                )
            }
        };

        StatusBar::new()
            .left(left)
            .right(self.hints.clone())
            .level(level)
    }
}

/// Schedule screen widget.
pub struct ScheduleScreen;

impl ScheduleScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ScheduleScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn message(text: String, style: Style) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

impl StatefulWidget for ScheduleScreen {
    type State = ScheduleScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [content_area, button_area, status_area] = layout.areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.accent))
            .title(TITLE);
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let centered = |height: u16| {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(height),
                Constraint::Fill(1),
            ])
            .areas(inner);
            middle
        };

        match &state.view {
            ViewState::Loading => {
                message(LOADING_TEXT.to_string(), Style::default().fg(Color::Cyan))
                    .render(centered(1), buf);
            }
            ViewState::Failed(error) => {
                let paragraph = message(
                    format!("{ERROR_PREFIX}{error}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                );
                let height = u16::try_from(paragraph.line_count(inner.width))
                    .unwrap_or(u16::MAX)
                    .min(inner.height);
                paragraph.render(centered(height), buf);
            }
            ViewState::Loaded(schedule) if schedule.is_empty() => {
                message(EMPTY_TEXT.to_string(), Style::default().fg(Color::Yellow))
                    .render(centered(1), buf);
            }
            ViewState::Loaded(schedule) => {
                SessionTable::new(schedule.sessions(), &state.mount_date)
                    .date_format(&state.date_format)
                    .style(state.table_style)
                    .render(inner, buf, &mut state.table_state);
            }
        }

        state.button_area = state.button.area_within(button_area);
        (&state.button).render(button_area, buf);

        (&state.status_bar()).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::{COLUMN_TITLES, REFRESH_LABEL, TODAY_MARKER};
    use chrono::NaiveDate;

    fn state(y: i32, m: u32, d: u32) -> ScheduleScreenState {
        let mount_date = MountDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        ScheduleScreenState::new(mount_date, &ViewOptions::default())
    }

    fn screen_text(state: &mut ScheduleScreenState) -> String {
        let area = Rect::new(0, 0, 120, 16);
        let mut buf = Buffer::empty(area);
        ScheduleScreen::new().render(area, &mut buf, state);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn session(id: u64, day: &str, date: &str) -> TrainingSession {
        TrainingSession::new(id, day, date).with_morning("7am", "Paddle")
    }

    #[test]
    fn test_loading_mode_is_exclusive() {
        let mut state = state(2024, 1, 2);
        let text = screen_text(&mut state);

        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains(EMPTY_TEXT));
        assert!(!text.contains(ERROR_PREFIX));
        assert!(!text.contains(COLUMN_TITLES[2]));
        assert!(text.contains(REFRESH_LABEL));
    }

    #[test]
    fn test_error_mode_shows_message_and_no_table() {
        let mut state = state(2024, 1, 2);
        state.apply_outcome(Err(ScheduleError::fetch_failed(
            "Network response was not ok (HTTP 502 Bad Gateway)",
        )));
        let text = screen_text(&mut state);

        assert_eq!(state.render_mode(), RenderMode::Error);
        assert!(text.contains("Error loading data: Network response was not ok"));
        assert!(!text.contains(LOADING_TEXT));
        assert!(!text.contains(COLUMN_TITLES[2]));
        assert!(text.contains(REFRESH_LABEL));
    }

    #[test]
    fn test_long_error_message_is_shown_in_full() {
        let mut state = state(2024, 1, 2);
        let detail = "error sending request for url (http://127.0.0.1:8000/api/training-data/): \
            client error (Connect): tcp connect error: Connection refused (os error 111) \
            while contacting the training plan server at the configured address FINAL_WORD";
        state.apply_outcome(Err(ScheduleError::fetch_failed(detail)));
        let text = screen_text(&mut state);

        assert!(text.contains("Error loading data: error sending request"));
        assert!(text.contains("FINAL_WORD"));
    }

    #[test]
    fn test_empty_mode_shows_placeholder_not_table() {
        let mut state = state(2024, 1, 2);
        state.apply_outcome(Ok(Vec::new()));
        let text = screen_text(&mut state);

        assert_eq!(state.render_mode(), RenderMode::Empty);
        assert!(text.contains(EMPTY_TEXT));
        assert!(!text.contains(COLUMN_TITLES[2]));
        assert!(text.contains(REFRESH_LABEL));
    }

    #[test]
    fn test_populated_mode_renders_one_row_per_session() {
        let mut state = state(2024, 1, 2);
        state.apply_outcome(Ok(vec![
            session(1, "Monday", "2024-01-01"),
            session(2, "Tuesday", "2024-01-02"),
            session(3, "Wednesday", "2024-01-03"),
        ]));
        let text = screen_text(&mut state);

        assert_eq!(state.render_mode(), RenderMode::Populated);
        assert_eq!(text.matches("Paddle").count(), 3);
        let mon = text.find("Monday").unwrap();
        let tue = text.find("Tuesday").unwrap();
        let wed = text.find("Wednesday").unwrap();
        assert!(mon < tue && tue < wed);

        let marked: Vec<&str> = text.lines().filter(|l| l.contains(TODAY_MARKER)).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Tuesday"));
        assert!(text.contains(REFRESH_LABEL));
        assert!(text.contains("3 sessions"));
    }

    #[test]
    fn test_button_area_recorded_on_render() {
        let mut state = state(2024, 1, 2);
        assert_eq!(state.button_area(), Rect::default());

        screen_text(&mut state);

        let button = state.button_area();
        assert_eq!(button.y, 14);
        assert!(button.width > 0);
    }

    #[test]
    fn test_scroll_offset_starts_near_today_and_is_clamped() {
        let mut state = state(2024, 1, 5);
        let sessions = (1..=6)
            .map(|d| session(d, "Day", &format!("2024-01-{d:02}")))
            .collect();
        state.apply_outcome(Ok(sessions));

        assert_eq!(state.scroll_offset(), 3);

        assert!(state.handle_action(Action::ScrollToBottom));
        assert_eq!(state.scroll_offset(), 5);
        state.handle_action(Action::ScrollDown);
        assert_eq!(state.scroll_offset(), 5);
        state.handle_action(Action::ScrollToTop);
        state.handle_action(Action::ScrollUp);
        assert_eq!(state.scroll_offset(), 0);

        assert!(!state.handle_action(Action::Refresh));
    }
}

//! Training schedule table widget.

use std::fmt::Write as _;

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{MountDate, TrainingSession};

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; 6] = [
    "Day",
    "Date",
    "Morning Time",
    "Morning Session",
    "Afternoon Time",
    "Afternoon Session",
];

/// Marker placed in front of today's row.
pub const TODAY_MARKER: &str = "▶";

const COLUMN_SPACING: u16 = 1;

const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Length(1),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(12),
    Constraint::Fill(1),
    Constraint::Length(14),
    Constraint::Fill(1),
];

/// Styling for the session table.
#[derive(Debug, Clone, Copy)]
pub struct SessionTableStyle {
    pub header: Style,
    pub row: Style,
    pub today: Style,
}

impl SessionTableStyle {
    /// Builds a style from the accent and today colors.
    #[must_use]
    pub fn themed(accent: Color, today: Color) -> Self {
        Self {
            header: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            row: Style::default(),
            today: Style::default()
                .fg(Color::Black)
                .bg(today)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for SessionTableStyle {
    fn default() -> Self {
        Self::themed(Color::Cyan, Color::Yellow)
    }
}

/// Renders sessions in received order, highlighting the mount date's row.
pub struct SessionTable<'a> {
    sessions: &'a [TrainingSession],
    mount_date: &'a MountDate,
    date_format: &'a str,
    style: SessionTableStyle,
}

impl<'a> SessionTable<'a> {
    #[must_use]
    pub fn new(sessions: &'a [TrainingSession], mount_date: &'a MountDate) -> Self {
        Self {
            sessions,
            mount_date,
            date_format: "%-m/%-d/%Y",
            style: SessionTableStyle::default(),
        }
    }

    #[must_use]
    pub const fn date_format(mut self, format: &'a str) -> Self {
        self.date_format = format;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: SessionTableStyle) -> Self {
        self.style = style;
        self
    }

    fn row(&self, session: &TrainingSession, widths: &[u16]) -> Row<'static> {
        let today = session.is_on(self.mount_date);
        let marker = if today { TODAY_MARKER } else { "" };
        let date = format_display_date(session.date(), self.date_format);

        let texts = [
            session.day(),
            date.as_str(),
            session.time_session_1(),
            session.session_1(),
            session.time_session_2(),
            session.session_2(),
        ];
        let columns: Vec<Vec<String>> = texts
            .iter()
            .zip(widths.iter().skip(1))
            .map(|(text, width)| wrap_cell(text, usize::from(*width)))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(1).max(1);

        let cells = std::iter::once(Cell::from(marker)).chain(columns.into_iter().map(|lines| {
            Cell::from(Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>()))
        }));

        Row::new(cells)
            .height(u16::try_from(height).unwrap_or(u16::MAX))
            .style(if today { self.style.today } else { self.style.row })
    }
}

impl StatefulWidget for SessionTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = Row::new(
            std::iter::once("")
                .chain(COLUMN_TITLES)
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
        .style(self.style.header)
        .bottom_margin(1);

        // Same split the table performs, so cells can be wrapped to fit.
        let widths: Vec<u16> = Layout::horizontal(COLUMN_WIDTHS)
            .spacing(COLUMN_SPACING)
            .split(Rect::new(0, 0, area.width, 1))
            .iter()
            .map(|column| column.width)
            .collect();

        let rows: Vec<Row> = self.sessions.iter().map(|s| self.row(s, &widths)).collect();

        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(COLUMN_SPACING);
        StatefulWidget::render(table, area, buf, state);
    }
}

/// Splits cell text into display lines: embedded newlines start a new line,
/// and lines wider than `width` are wrapped at spaces, or mid-word when a
/// single word does not fit. Lines that fit are kept verbatim.
fn wrap_cell(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.split('\n').map(|line| line.trim_end_matches('\r')) {
        if width == 0 || raw.width() <= width {
            lines.push(raw.to_string());
            continue;
        }

        let mut current = String::new();
        for word in raw.split_whitespace() {
            let joined = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if joined <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                if !current.is_empty() && current.width() + ch.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
        lines.push(current);
    }

    lines
}

/// Formats an ISO date with a chrono format string. Values that are not ISO
/// dates, or formats chrono rejects, fall back to the raw text.
#[must_use]
pub fn format_display_date(raw: &str, format: &str) -> String {
    let Some(date) = raw
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    else {
        return raw.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return raw.to_string();
    }
    out
}

//! Frame rendering: header, inputs, results and status bar.

use chrono::{Datelike, NaiveDateTime};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::date::format_date;
use crate::form::Field;

const ACCENT: Color = Color::Rgb(0x85, 0x4d, 0xff);

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App, now: NaiveDateTime) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1),
            Constraint::Length(3), // Inputs
            Constraint::Length(1),
            Constraint::Min(3),    // Results
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_chunks[0], now);
    draw_inputs(frame, main_chunks[2], app, now.year());
    draw_results(frame, main_chunks[4], app);
    draw_status(frame, main_chunks[5], app);
}

fn draw_header(frame: &mut Frame, area: Rect, now: NaiveDateTime) {
    let title = "Age Calculator";
    let today = format_date(&now.date());

    let padding =
        area.width.saturating_sub(title.len() as u16 + today.len() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {}", title), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(today, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_inputs(frame: &mut Frame, area: Rect, app: &App, current_year: i32) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    for (field, chunk) in Field::ALL.into_iter().zip(chunks.iter()) {
        let flagged = app.form.flags.get(field);
        let focused = app.focus == field;

        let border_style = match (flagged, focused) {
            (true, _) => Style::default().fg(Color::Red).bold(),
            (false, true) => Style::default().fg(ACCENT),
            (false, false) => Style::default(),
        };

        let raw = app.input(field);
        let text = if raw.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else if flagged {
            Span::styled(raw, Style::default().fg(Color::Red))
        } else {
            Span::raw(raw)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label())
            .title_bottom(Line::styled(
                format!("max {}", field.max(current_year)),
                Style::default().fg(Color::DarkGray),
            ));

        frame.render_widget(Paragraph::new(Line::from(text)).block(block), *chunk);

        if focused {
            let x = chunk.x + 1 + raw.len() as u16;
            frame.set_cursor_position((x.min(chunk.right().saturating_sub(2)), chunk.y + 1));
        }
    }
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let values = app.form.display_values();

    let lines: Vec<Line> = values
        .iter()
        .zip(["years", "months", "days"])
        .map(|(value, unit)| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(value.clone(), Style::default().fg(ACCENT).bold()),
                Span::raw(format!(" {}", unit)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let left_text = " [0-9] edit  [Tab] next field  [Enter] submit  [Esc] quit";

    let right = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Span::styled(status.text.clone(), style)
        }
        None if app.strict => Span::styled("Strict", Style::default().fg(Color::DarkGray)),
        None => Span::styled("Ready", Style::default().fg(Color::DarkGray)),
    };

    let padding =
        area.width.saturating_sub(left_text.len() as u16 + right.width() as u16 + 2) as usize;

    let line = Line::from(vec![
        Span::styled(left_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        right,
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

//! Feedback table component
//!
//! One row per feedback record, newest first, with an optional second line
//! for corrections, note and audio link.

use super::super::state::DashboardState;
use super::super::utils::truncate;
use super::super::view::feedback_row;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

const TRANSCRIPT_WIDTH: usize = 40;

pub fn render_feedback(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("FEEDBACK ({})", state.feedback.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.feedback.is_empty() {
        f.render_widget(
            Paragraph::new(empty_hint(state))
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = state
        .feedback
        .iter()
        .map(|record| {
            let row = feedback_row(record, state.placeholder_mode);
            let correct_color = if record.was_correct == Some(true) {
                Color::Green
            } else {
                Color::Red
            };
            let mut transcript = vec![Line::from(truncate(&row.transcript, TRANSCRIPT_WIDTH))];
            if let Some(detail) = &row.detail {
                transcript.push(Line::styled(
                    format!("↳ {}", detail),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let height = transcript.len() as u16;
            Row::new(vec![
                Cell::from(row.created_at),
                Cell::from(Text::from(transcript)),
                Cell::from(row.intent),
                Cell::from(row.item),
                Cell::from(row.location),
                Cell::from(row.confidence),
                Cell::from(row.action_type),
                Cell::from(row.was_correct).style(Style::default().fg(correct_color)),
            ])
            .height(height)
        })
        .collect();

    let header = Row::new(vec![
        "Date", "Transcript", "Intent", "Item", "Location", "Conf.", "Action", "Correct",
    ])
    .style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(19),
        Constraint::Fill(3),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn empty_hint(state: &DashboardState) -> &'static str {
    if state.selected_email.is_empty() {
        "Select a user to see their feedback."
    } else if state.is_loading() {
        "Loading..."
    } else {
        "No feedback records."
    }
}

//! Stored items table component

use super::super::state::DashboardState;
use super::super::view::item_row;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table};

pub fn render_items(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("STORED ITEMS ({})", state.items.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.items.is_empty() {
        let hint = if state.selected_email.is_empty() {
            "Select a user to see their items."
        } else {
            "No stored items."
        };
        f.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = state
        .items
        .iter()
        .map(|item| {
            let row = item_row(item, state.placeholder_mode);
            Row::new(vec![row.item_name, row.location, row.notes, row.created_at])
        })
        .collect();

    let header = Row::new(vec!["Item", "Location", "Notes", "Saved"]).style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Length(19),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

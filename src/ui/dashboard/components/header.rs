//! Dashboard header component
//!
//! Renders the title and the selection status line

use super::super::state::{DashboardState, DetailPhase};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render header with title and status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("TRANSCRIPT FEEDBACK DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    f.render_widget(
        Paragraph::new(status_line(state)).alignment(Alignment::Center),
        header_chunks[1],
    );
}

fn status_line(state: &DashboardState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("Service: {}  ", state.service_host),
        Style::default().fg(Color::DarkGray),
    )];

    let user = if state.selected_email.is_empty() {
        "none".to_string()
    } else {
        state.selected_email.clone()
    };
    spans.push(Span::styled(
        format!("User: {}  ", user),
        Style::default().fg(Color::LightBlue),
    ));

    if state.page.is_paged() {
        spans.push(Span::styled(
            format!("Page: {}  ", state.page.number()),
            Style::default().fg(Color::LightYellow),
        ));
    }

    if state.is_loading() {
        spans.push(Span::styled(
            format!("{} Loading...", SPINNER[state.tick % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(error) = &state.error {
        spans.push(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if state.detail_phase() == DetailPhase::Success {
        spans.push(Span::styled("Loaded", Style::default().fg(Color::Green)));
    }

    Line::from(spans)
}

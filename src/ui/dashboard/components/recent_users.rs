//! Recent users strip

use super::super::state::DashboardState;
use super::super::view::recent_user_view;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_recent_users(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut spans = Vec::new();
    for (i, user) in state.recent_users.iter().enumerate() {
        let view = recent_user_view(user, state.placeholder_mode);
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(view.email, Style::default().fg(Color::LightCyan)));
        spans.push(Span::styled(
            format!(" ({})", view.created_at),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title("RECENT USERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

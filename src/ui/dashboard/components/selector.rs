//! User selector component
//!
//! Renders the placeholder option followed by every loaded user

use super::super::state::DashboardState;
use super::super::view::selector_options;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

pub fn render_selector(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let items: Vec<ListItem> = selector_options(&state.users)
        .into_iter()
        .map(|option| {
            let selected = !option.email.is_empty() && option.email == state.selected_email;
            if selected {
                ListItem::new(format!("● {}", option.label))
                    .style(Style::default().fg(Color::LightGreen))
            } else if option.email.is_empty() {
                ListItem::new(format!("  {}", option.label))
                    .style(Style::default().fg(Color::DarkGray))
            } else {
                ListItem::new(format!("  {}", option.label))
            }
        })
        .collect();

    let block = Block::default()
        .title(format!("USERS ({})", state.users.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selector_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

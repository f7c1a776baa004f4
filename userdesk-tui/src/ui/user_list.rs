use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, ListViewState};
use crate::ui::{components, layout};

pub fn render(app: &App, list: &ListViewState, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header("Users List", &app.route, frame, chunks[0]);

    let body = layout::create_list_layout(chunks[1]);
    render_status(list, frame, body[0]);
    render_rows(list, frame, body[1]);
    render_pagination(list, frame, body[2]);

    components::render_footer(
        "j/k: Select | e: Edit | d: Delete | p/n: Page | r: Reload | q: Quit",
        frame,
        chunks[2],
    );
}

fn render_status(list: &ListViewState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if list.loading {
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Gray)));
    }
    if let Some(error) = &list.error {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

fn render_rows(list: &ListViewState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Page {}", list.page));

    if list.users.is_empty() {
        let empty = Paragraph::new("No users found.")
            .style(Style::default().fg(Color::Gray))
            .centered()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == list.selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if is_selected { "> " } else { "  " };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(indicator, style),
                    Span::styled(user.full_name(), style),
                    Span::styled(format!("  <{}>", user.email), Style::default().fg(Color::Gray)),
                ]),
                Line::from(Span::styled(
                    format!("    {}", user.avatar),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_pagination(list: &ListViewState, frame: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(1),
            Constraint::Length(14),
        ])
        .split(area);

    let previous_style = if list.page <= 1 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let previous = Paragraph::new("< Previous")
        .style(previous_style)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(previous, cells[0]);

    let position = match list.total_pages {
        Some(total) => format!("Page {} of {}", list.page, total),
        None => format!("Page {}", list.page),
    };
    let position = Paragraph::new(position)
        .style(Style::default().fg(Color::Gray))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(position, cells[1]);

    let next = Paragraph::new("Next >")
        .style(Style::default().fg(Color::Cyan))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(next, cells[2]);
}

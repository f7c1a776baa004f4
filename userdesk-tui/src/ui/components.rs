use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::router::Route;
use crate::ui::layout;

/// Title on the left, current path on the right, like an address bar
pub fn render_header(title: &str, route: &Route, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from(route.path()).right_aligned())
                .title_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}

/// Single-line input box. The focused one gets a cursor and a highlighted border.
pub fn render_text_input(label: &str, value: &str, focused: bool, frame: &mut Frame, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(value, Style::default().fg(Color::White))];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} *", label))
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// Blocking notification drawn over the current screen
pub fn render_notification(message: &str, frame: &mut Frame) {
    let area = layout::centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled("Enter: OK", Style::default().fg(Color::Gray))).centered(),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .border_style(Style::default().fg(Color::Red)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(dialog, area);
}

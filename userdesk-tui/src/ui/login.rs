use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::{components, layout};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header("userdesk", &app.route, frame, chunks[0]);

    let welcome = Paragraph::new(vec![
        Line::from(""),
        Line::from("User Management").style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Press Enter to continue to the user list."),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL).title("Login"));
    frame.render_widget(welcome, chunks[1]);

    components::render_footer("Enter: Continue | q/Esc: Quit", frame, chunks[2]);
}

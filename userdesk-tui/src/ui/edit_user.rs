use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, EditPhase, EditViewState, Field};
use crate::ui::{components, layout};

pub fn render(app: &App, edit: &EditViewState, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(
        &format!("Edit User #{}", edit.id),
        &app.route,
        frame,
        chunks[0],
    );

    let form = layout::create_form_layout(chunks[1]);
    for (i, field) in Field::ALL.into_iter().enumerate() {
        components::render_text_input(
            field.label(),
            edit.form.value(field),
            edit.focus == field,
            frame,
            form[i],
        );
    }

    if let Some(message) = &edit.validation {
        let validation = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .centered();
        frame.render_widget(validation, form[3]);
    }

    let (label, style) = match edit.phase {
        EditPhase::Submitting => ("Updating...", Style::default().fg(Color::DarkGray)),
        EditPhase::NotLoaded | EditPhase::Loaded => (
            "Update User",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    };
    let button = Paragraph::new(label)
        .style(style)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, form[4]);

    components::render_footer(
        "Tab/Up/Down: Field | Enter: Update | Esc: Back",
        frame,
        chunks[2],
    );
}

pub mod components;
pub mod edit_user;
pub mod layout;
pub mod login;
pub mod user_list;

use ratatui::Frame;

use crate::app::{App, View};

pub fn render(app: &App, frame: &mut Frame) {
    match &app.view {
        View::Login => login::render(app, frame),
        View::UserList(list) => user_list::render(app, list, frame),
        View::EditUser(edit) => edit_user::render(app, edit, frame),
    }

    if let Some(message) = &app.notification {
        components::render_notification(message, frame);
    }
}

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, EditPhase, View};
use crate::router::Route;

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.quit();
            return Ok(());
        }

        // A modal swallows everything until dismissed
        if self.notification.is_some() {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_notification();
            }
            return Ok(());
        }

        let submitting = self
            .edit_state()
            .is_some_and(|edit| edit.phase == EditPhase::Submitting);

        match self.view {
            View::Login => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Enter => self.navigate(Route::Users),
                _ => {}
            },

            View::UserList(_) => match key_event.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Esc => self.go_back(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Left | KeyCode::Char('p') => self.previous_page(),
                KeyCode::Right | KeyCode::Char('n') => self.next_page(),
                KeyCode::Char('r') => self.load_page(),
                _ => {}
            },

            View::EditUser(_) => match key_event.code {
                KeyCode::Esc => self.go_back(),
                KeyCode::Enter => self.submit(),
                KeyCode::Tab | KeyCode::Down => self.move_down(),
                KeyCode::BackTab | KeyCode::Up => self.move_up(),
                KeyCode::Backspace if !submitting => self.delete_char(),
                KeyCode::Char(c) if !submitting => self.type_char(c),
                _ => {}
            },
        }
        Ok(())
    }
}

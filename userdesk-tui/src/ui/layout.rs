use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Standard 3-section layout: header, main, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// List body: status line, rows, pagination bar
pub fn create_list_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Loading / error
            Constraint::Min(1),    // Rows
            Constraint::Length(3), // Pagination
        ])
        .split(area)
        .to_vec()
}

/// Edit body: three inputs, validation line, submit button
pub fn create_form_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Email
            Constraint::Length(1), // Validation
            Constraint::Length(3), // Submit
            Constraint::Min(0),
        ])
        .split(area)
        .to_vec()
}

/// Fixed-size box centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

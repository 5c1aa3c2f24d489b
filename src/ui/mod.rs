pub mod components;
pub mod form;
pub mod roster;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    let search = match app.input_mode {
        InputMode::Search => format!("  Search buses: {}_", app.roster.search_query),
        _ if !app.roster.search_query.is_empty() => format!("  Search: {}", app.roster.search_query),
        _ => String::new(),
    };
    let p = Paragraph::new(format!(
        "{}{search}  — /: search; n: add; e: edit; d: delete; r: reload; q: quit",
        app.endpoint
    ))
    .block(
        Block::default()
            .title("Bus Management")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    let fetch_error = app.roster.error.as_ref().filter(|e| e.replaces_view()).map(|e| e.message.clone());
    if let Some(message) = fetch_error {
        components::render_error_screen(f, root[1], app, &message);
    } else if app.roster.loading {
        roster::render_skeleton(f, root[1], app);
    } else {
        roster::render_bus_table(f, root[1], app);
    }

    components::render_status_bar(f, root[2], app);

    let area = f.area();
    if app.roster.dialog_open() {
        form::render_form_modal(f, area, app);
    }
    if let Some(state) = app.modal.clone() {
        components::render_delete_modal(f, area, app, &state);
    }
    if let Some(err) = app.roster.error.as_ref().filter(|e| !e.replaces_view()) {
        components::render_error_modal(f, area, app, &err.message);
    }
}

//! Shared UI components (status bar, modal helpers, error views).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode, ModalState};

/// Render the bottom status bar with mode and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Form => "FORM",
        InputMode::Modal => "MODAL",
    };
    let loading = if app.roster.loading { "  loading…" } else { "" };
    let msg = format!(
        "mode: {mode}  buses:{}  shown:{}  rows/page:{}{loading}",
        app.roster.buses.len(),
        app.roster.visible().len(),
        app.rows_per_page,
    );
    let p = Paragraph::new(msg).style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect { x, y, width: width.min(area.width), height: height.min(area.height) }
}

/// Full-body error shown in place of the table when the list could not be fetched.
pub fn render_error_screen(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let reload = app.keymap.keys_for(KeyAction::Reload).join("/");
    let lines = vec![
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(app.theme.error_fg).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Press {reload} to reload, Esc to show the last known list."),
            Style::default().fg(app.theme.muted),
        )),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default().title("Buses").borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

/// Error overlay for a failed add, update or delete.
pub fn render_error_modal(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let max_w = area.width.saturating_sub(6).max(30);
    let width = 48u16.min(max_w);
    let approx_lines = (message.len() as u16 / width.saturating_sub(4).max(10)).max(1);
    let height = (approx_lines + 4).min(area.height.saturating_sub(2)).max(5);
    let rect = centered_rect(width, height, area);
    let body = format!("{message}\n\nEsc/Enter: dismiss");
    let p = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.error_fg))
        .block(Block::default().title("Error").borders(Borders::ALL).border_style(Style::default().fg(app.theme.error_fg)));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

pub fn render_delete_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    let ModalState::DeleteConfirm { id, bus_number, selected } = state;
    let rect = centered_rect(50, 7, area);
    let yes = if *selected == 0 { "[Yes]" } else { " Yes " };
    let no = if *selected == 1 { "[No]" } else { " No  " };
    let body = format!("Delete bus '{bus_number}' (id {id})?\n\n  {yes}    {no}");
    let p = Paragraph::new(body).block(
        Block::default().title("Confirm delete").borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

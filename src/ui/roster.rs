use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::AppState;
use crate::model::display_date;

const HEADERS: [&str; 6] = ["Bus Number", "Type", "Capacity", "Last Maintenance", "Next Maintenance", "ID"];

fn widths() -> [Constraint; 6] {
    [
        Constraint::Percentage(24),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Min(6),
    ]
}

fn header(app: &AppState) -> Row<'static> {
    Row::new(HEADERS.to_vec()).style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
}

fn table_block(app: &AppState, title: String) -> Block<'static> {
    Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(app.theme.border))
}

/// Paged table of the visible buses with the selection highlighted.
pub fn render_bus_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 { app.rows_per_page = body_height; }

    let visible = app.roster.visible();
    let start = (app.selected_index / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(visible.len());
    let slice = &visible[start..end];

    let rows = slice.iter().enumerate().map(|(i, b)| {
        let style = if start + i == app.selected_index {
            Style::default().fg(app.theme.highlight_fg).bg(app.theme.highlight_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![
            Cell::from(b.info.bus_number.clone()),
            Cell::from(b.info.bus_type.as_str()),
            Cell::from(b.info.capacity.to_string()),
            Cell::from(display_date(&b.info.last_maintenance)),
            Cell::from(display_date(&b.info.next_maintenance)),
            Cell::from(b.id.to_string()),
        ])
        .style(style)
    });

    let title = if app.roster.search_query.is_empty() {
        format!("Buses ({})", app.roster.buses.len())
    } else {
        format!("Buses ({} of {})", visible.len(), app.roster.buses.len())
    };
    let table = Table::new(rows, widths())
        .header(header(app))
        .block(table_block(app, title))
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Placeholder rows shown while the list is being fetched.
pub fn render_skeleton(f: &mut Frame, area: Rect, app: &AppState) {
    let bars = ["░".repeat(10), "░".repeat(7), "░".repeat(3), "░".repeat(10), "░".repeat(10), "░".repeat(2)];
    let rows = (0..5).map(|_| {
        Row::new(bars.iter().map(|b| Cell::from(b.clone())).collect::<Vec<_>>())
            .style(Style::default().fg(app.theme.muted))
    });
    let table = Table::new(rows, widths())
        .header(header(app))
        .block(table_block(app, "Buses (loading…)".to_string()))
        .column_spacing(1);
    f.render_widget(table, area);
}

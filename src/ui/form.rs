//! The add/edit bus dialog.
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{AppState, FormField};
use crate::model::{BusDraft, BusType};

fn field_value(draft: &BusDraft, field: FormField) -> String {
    match field {
        FormField::BusNumber => draft.bus_number.clone(),
        FormField::BusType => BusType::ALL
            .iter()
            .map(|t| if *t == draft.bus_type { format!("[{t}]") } else { format!(" {t} ") })
            .collect::<Vec<_>>()
            .join(" "),
        FormField::Capacity => draft.capacity.to_string(),
        FormField::LastMaintenance => draft.last_maintenance.clone(),
        FormField::NextMaintenance => draft.next_maintenance.clone(),
    }
}

pub fn render_form_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(draft) = app.form_target() else { return };
    let (title, submit) = if app.roster.edit_dialog_open {
        ("Edit Bus", "Update Bus")
    } else {
        ("Add New Bus", "Add Bus")
    };

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::ALL {
        let focused = field == app.form_field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(app.theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        let hint = match field {
            FormField::LastMaintenance | FormField::NextMaintenance if focused => "  (YYYY-MM-DD)",
            FormField::BusType if focused => "  (←/→)",
            _ => "",
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<22}", field.label()), label_style),
            Span::raw(field_value(draft, field)),
            Span::styled(hint, Style::default().fg(app.theme.muted)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Enter: {submit}   Tab/↑/↓: field   Esc: close"),
        Style::default().fg(app.theme.muted).add_modifier(Modifier::ITALIC),
    )));

    let width = 70u16.min(area.width.saturating_sub(4)).max(40);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = crate::ui::components::centered_rect(width, height, area);
    let p = Paragraph::new(lines).block(
        Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

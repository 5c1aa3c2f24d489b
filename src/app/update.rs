use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::keymap::KeyAction;
use crate::app::ops::{Dispatcher, Request};
use crate::app::state::Action;
use crate::app::{AppState, FormField, InputMode, ModalState};
use crate::ui;

/// What the loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    Issue(Request),
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    dispatcher: &Dispatcher,
    responses: &mut UnboundedReceiver<Action>,
) -> Result<()> {
    issue(app, dispatcher, Request::Load);

    loop {
        while let Ok(action) = responses.try_recv() {
            app.apply(action);
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(app, key) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Issue(request) => issue(app, dispatcher, request),
                        KeyOutcome::Continue => {}
                    }
                }
            }
        }
    }

    tracing::info!("leaving roster loop");
    Ok(())
}

fn issue(app: &mut AppState, dispatcher: &Dispatcher, request: Request) {
    if request == Request::Load {
        app.apply(Action::LoadStarted);
    }
    dispatcher.issue(request);
}

/// Route a key press according to the current mode.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    // A mutation error sits on top of everything until dismissed.
    let overlay = app.roster.error.as_ref().is_some_and(|e| !e.replaces_view());
    if overlay {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.apply(Action::DismissError);
        }
        return KeyOutcome::Continue;
    }

    // Text inputs never take control chords.
    let text_input = matches!(app.input_mode, InputMode::Search | InputMode::Form);
    if text_input && ctrl && matches!(key.code, KeyCode::Char(_)) {
        return KeyOutcome::Continue;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => {
            handle_search_key(app, key.code);
            KeyOutcome::Continue
        }
        InputMode::Form => handle_form_key(app, key.code),
        InputMode::Modal => handle_modal_key(app, key.code),
    }
}

fn handle_normal_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    let Some(action) = app.keymap.resolve(&key) else { return KeyOutcome::Continue };
    let visible_len = app.roster.visible().len();
    match action {
        KeyAction::Quit => return KeyOutcome::Quit,
        KeyAction::StartSearch => app.input_mode = InputMode::Search,
        KeyAction::NewBus => {
            app.apply(Action::OpenCreate);
            app.form_field = FormField::BusNumber;
            app.input_mode = InputMode::Form;
        }
        KeyAction::EditSelection => {
            if let Some(bus) = app.selected_bus().cloned() {
                app.apply(Action::OpenEdit(bus));
                app.form_field = FormField::BusNumber;
                app.input_mode = InputMode::Form;
            }
        }
        KeyAction::DeleteSelection => {
            if let Some((id, bus_number)) = app.selected_bus().map(|b| (b.id, b.info.bus_number.clone())) {
                app.modal = Some(ModalState::DeleteConfirm { id, bus_number, selected: 1 });
                app.input_mode = InputMode::Modal;
            }
        }
        KeyAction::Reload => return KeyOutcome::Issue(Request::Load),
        KeyAction::DismissError => app.apply(Action::DismissError),
        KeyAction::MoveUp => { if app.selected_index > 0 { app.selected_index -= 1; } }
        KeyAction::MoveDown => { if app.selected_index + 1 < visible_len { app.selected_index += 1; } }
        KeyAction::PageUp => {
            let rpp = app.rows_per_page.max(1);
            app.selected_index = app.selected_index.saturating_sub(rpp);
        }
        KeyAction::PageDown => {
            let rpp = app.rows_per_page.max(1);
            app.selected_index = app.selected_index.saturating_add(rpp).min(visible_len.saturating_sub(1));
        }
        KeyAction::Ignore => {}
    }
    KeyOutcome::Continue
}

fn handle_search_key(app: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.apply(Action::SetSearch(String::new()));
        }
        KeyCode::Backspace => {
            let mut q = app.roster.search_query.clone();
            q.pop();
            app.apply(Action::SetSearch(q));
        }
        KeyCode::Char(c) => {
            let mut q = app.roster.search_query.clone();
            q.push(c);
            app.apply(Action::SetSearch(q));
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut AppState, code: KeyCode) -> KeyOutcome {
    match code {
        KeyCode::Esc => {
            let close = if app.roster.edit_dialog_open { Action::CloseEdit } else { Action::CloseCreate };
            app.apply(close);
            app.input_mode = InputMode::Normal;
            return KeyOutcome::Continue;
        }
        KeyCode::Enter => return submit_form(app),
        KeyCode::Tab | KeyCode::Down => {
            app.form_field = app.form_field.next();
            return KeyOutcome::Continue;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_field = app.form_field.prev();
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    let field = app.form_field;
    let Some(target) = app.form_target_mut() else { return KeyOutcome::Continue };
    match field {
        FormField::BusType => match code {
            KeyCode::Right | KeyCode::Char(' ') => target.bus_type = target.bus_type.next(),
            KeyCode::Left => target.bus_type = target.bus_type.prev(),
            _ => {}
        },
        FormField::Capacity => match code {
            KeyCode::Char(c) => {
                if let Some(d) = c.to_digit(10) {
                    target.capacity = target.capacity.saturating_mul(10).saturating_add(d);
                }
            }
            KeyCode::Backspace => target.capacity /= 10,
            _ => {}
        },
        FormField::BusNumber | FormField::LastMaintenance | FormField::NextMaintenance => {
            let text = match field {
                FormField::BusNumber => &mut target.bus_number,
                FormField::LastMaintenance => &mut target.last_maintenance,
                _ => &mut target.next_maintenance,
            };
            match code {
                KeyCode::Char(c) => text.push(c),
                KeyCode::Backspace => { text.pop(); }
                _ => {}
            }
        }
    }
    KeyOutcome::Continue
}

/// The dialog stays open until the response arrives; the reducer closes it on success.
fn submit_form(app: &mut AppState) -> KeyOutcome {
    if app.roster.edit_dialog_open {
        match app.roster.editing.clone() {
            Some(bus) => KeyOutcome::Issue(Request::Update(bus)),
            None => KeyOutcome::Continue,
        }
    } else if app.roster.add_dialog_open {
        KeyOutcome::Issue(Request::Create(app.roster.draft.clone()))
    } else {
        KeyOutcome::Continue
    }
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) -> KeyOutcome {
    let Some(ModalState::DeleteConfirm { id, selected, .. }) = &mut app.modal else {
        close_modal(app);
        return KeyOutcome::Continue;
    };
    let id = *id;
    match code {
        KeyCode::Esc | KeyCode::Char('n') => close_modal(app),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => { *selected = if *selected == 0 { 1 } else { 0 }; }
        KeyCode::Char('y') => {
            close_modal(app);
            return KeyOutcome::Issue(Request::Delete(id));
        }
        KeyCode::Enter => {
            let confirmed = *selected == 0;
            close_modal(app);
            if confirmed {
                return KeyOutcome::Issue(Request::Delete(id));
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn close_modal(app: &mut AppState) {
    app.modal = None;
    app.input_mode = InputMode::Normal;
}

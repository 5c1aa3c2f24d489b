//! Application state types and entry glue.
//!
//! [`AppState`] wraps the serializable [`state::RosterState`] with the bits
//! only the terminal needs (selection, input mode, form focus, theme,
//! keymap). The event loop lives in [`update`] and is re-exported as `run`.
//!
pub mod config;
pub mod keymap;
pub mod ops;
pub mod state;
pub mod theme;
pub mod update;

use crate::model::{Bus, BusDraft, BusId};
use keymap::Keymap;
use state::{Action, RosterState, reduce};
use theme::Theme;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    /// The add or edit dialog has focus.
    Form,
    Modal,
}

/// Fields of the bus form, in tab order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    BusNumber,
    BusType,
    Capacity,
    LastMaintenance,
    NextMaintenance,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::BusNumber,
        FormField::BusType,
        FormField::Capacity,
        FormField::LastMaintenance,
        FormField::NextMaintenance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::BusNumber => "Bus Number",
            FormField::BusType => "Type",
            FormField::Capacity => "Capacity",
            FormField::LastMaintenance => "Last Maintenance Date",
            FormField::NextMaintenance => "Next Maintenance Date",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dialogs that are not part of the roster state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// `selected`: 0 = Yes, 1 = No.
    DeleteConfirm { id: BusId, bus_number: String, selected: usize },
}

pub struct AppState {
    pub roster: RosterState,
    /// Index into the visible (filtered) rows.
    pub selected_index: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub form_field: FormField,
    pub modal: Option<ModalState>,
    pub theme: Theme,
    pub keymap: Keymap,
    /// Shown in the header.
    pub endpoint: String,
}

impl AppState {
    pub fn new(theme: Theme, keymap: Keymap, endpoint: impl Into<String>) -> Self {
        Self {
            roster: RosterState::default(),
            selected_index: 0,
            rows_per_page: 10,
            input_mode: InputMode::Normal,
            form_field: FormField::BusNumber,
            modal: None,
            theme,
            keymap,
            endpoint: endpoint.into(),
        }
    }

    /// Feed one action through the reducer and fix up selection and mode.
    pub fn apply(&mut self, action: Action) {
        let roster = std::mem::take(&mut self.roster);
        self.roster = reduce(roster, action);
        self.clamp_selection();
        if self.input_mode == InputMode::Form && !self.roster.dialog_open() {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.roster.visible().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn selected_bus(&self) -> Option<&Bus> {
        self.roster.visible().get(self.selected_index).copied()
    }

    /// The record the open dialog is editing: the draft for "add", the edit copy for "edit".
    pub fn form_target_mut(&mut self) -> Option<&mut BusDraft> {
        if self.roster.edit_dialog_open {
            self.roster.editing.as_mut().map(|b| &mut b.info)
        } else if self.roster.add_dialog_open {
            Some(&mut self.roster.draft)
        } else {
            None
        }
    }

    pub fn form_target(&self) -> Option<&BusDraft> {
        if self.roster.edit_dialog_open {
            self.roster.editing.as_ref().map(|b| &b.info)
        } else if self.roster.add_dialog_open {
            Some(&self.roster.draft)
        } else {
            None
        }
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_cycle() {
        assert_eq!(FormField::NextMaintenance.next(), FormField::BusNumber);
        assert_eq!(FormField::BusNumber.prev(), FormField::NextMaintenance);
        for f in FormField::ALL {
            assert_eq!(f.next().prev(), f);
        }
    }

    #[test]
    fn apply_clamps_selection_after_delete() {
        let mut app = AppState::new(Theme::dark(), Keymap::default(), "test");
        let buses = (1..=3).map(|i| Bus::new(i, BusDraft::default())).collect();
        app.apply(Action::Loaded(buses));
        app.selected_index = 2;
        app.apply(Action::Deleted(3));
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_bus().map(|b| b.id), Some(2));
    }
}

//! Roster view state and the reducer that reconciles it with API results.
//!
//! [`RosterState`] holds everything the screen shows that is not purely
//! cosmetic: the canonical bus list, the search term, both dialog flags, the
//! pending draft and edit copy, the loading flag and the error. It changes
//! only through [`reduce`].
//!
use serde::{Deserialize, Serialize};

use crate::error::Operation;
use crate::model::{Bus, BusDraft, BusId};
use crate::search::filter_buses;

/// The error currently shown, and which operation produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorState {
    pub operation: Operation,
    pub message: String,
}

impl ErrorState {
    pub fn of(operation: Operation) -> Self {
        Self { operation, message: operation.failure_message().to_string() }
    }

    /// A failed fetch replaces the table; other failures overlay it.
    pub fn replaces_view(&self) -> bool {
        self.operation == Operation::Fetch
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    /// Canonical list; the only source of truth between refreshes.
    pub buses: Vec<Bus>,
    pub search_query: String,
    pub add_dialog_open: bool,
    pub edit_dialog_open: bool,
    pub draft: BusDraft,
    pub editing: Option<Bus>,
    pub loading: bool,
    pub error: Option<ErrorState>,
}

impl RosterState {
    /// Buses matching the current search term, in list order.
    pub fn visible(&self) -> Vec<&Bus> {
        filter_buses(&self.buses, &self.search_query)
    }

    pub fn find(&self, id: BusId) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id == id)
    }

    pub fn dialog_open(&self) -> bool {
        self.add_dialog_open || self.edit_dialog_open
    }
}

/// Everything that can happen to the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    LoadStarted,
    Loaded(Vec<Bus>),
    LoadFailed,
    OpenCreate,
    CloseCreate,
    Created(Bus),
    CreateFailed,
    OpenEdit(Bus),
    CloseEdit,
    Updated(Bus),
    UpdateFailed,
    Deleted(BusId),
    DeleteFailed,
    SetSearch(String),
    DismissError,
}

/// Apply one action and return the new state.
pub fn reduce(mut state: RosterState, action: Action) -> RosterState {
    match action {
        Action::LoadStarted => {
            state.loading = true;
        }
        Action::Loaded(buses) => {
            state.buses = buses;
            state.loading = false;
            state.error = None;
        }
        Action::LoadFailed => {
            state.loading = false;
            state.error = Some(ErrorState::of(Operation::Fetch));
        }
        Action::OpenCreate => {
            state.add_dialog_open = true;
        }
        Action::CloseCreate => {
            state.add_dialog_open = false;
        }
        Action::Created(bus) => {
            state.buses.push(bus);
            state.add_dialog_open = false;
            state.draft = BusDraft::default();
        }
        Action::CreateFailed => {
            state.error = Some(ErrorState::of(Operation::Create));
        }
        Action::OpenEdit(bus) => {
            state.editing = Some(bus);
            state.edit_dialog_open = true;
        }
        Action::CloseEdit => {
            state.edit_dialog_open = false;
            state.editing = None;
        }
        Action::Updated(bus) => {
            // No entry with that id (deleted meanwhile): nothing to replace.
            if let Some(slot) = state.buses.iter_mut().find(|b| b.id == bus.id) {
                *slot = bus;
            }
            state.edit_dialog_open = false;
            state.editing = None;
        }
        Action::UpdateFailed => {
            state.error = Some(ErrorState::of(Operation::Update));
        }
        Action::Deleted(id) => {
            state.buses.retain(|b| b.id != id);
        }
        Action::DeleteFailed => {
            state.error = Some(ErrorState::of(Operation::Delete));
        }
        Action::SetSearch(query) => {
            state.search_query = query;
        }
        Action::DismissError => {
            state.error = None;
        }
    }
    state
}

//! The four roster operations and the bridge that runs them off the UI thread.
//!
//! [`perform`] is the operation boundary: it calls the API, logs any failure
//! and turns the outcome into an [`Action`] for the reducer. [`Dispatcher`]
//! spawns one task per request on the tokio runtime and hands the resulting
//! actions back to the terminal loop over a channel.
//!
//! In-flight requests are neither serialized nor cancelled. Responses are
//! applied in arrival order, so the last one to resolve wins.
//!
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::BusApi;
use crate::app::state::Action;
use crate::error::Operation;
use crate::model::{Bus, BusDraft, BusId};

/// A network request the roster can issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Load,
    Create(BusDraft),
    Update(Bus),
    Delete(BusId),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Load => Operation::Fetch,
            Request::Create(_) => Operation::Create,
            Request::Update(_) => Operation::Update,
            Request::Delete(_) => Operation::Delete,
        }
    }
}

/// Run `request` against `api` and translate the result into an action.
pub async fn perform(api: &dyn BusApi, request: Request) -> Action {
    let operation = request.operation();
    match request {
        Request::Load => match api.list().await {
            Ok(buses) => {
                tracing::info!(count = buses.len(), "fetched buses");
                Action::Loaded(buses)
            }
            Err(err) => {
                tracing::error!(%operation, error = %err, "error fetching buses");
                Action::LoadFailed
            }
        },
        Request::Create(draft) => match api.create(&draft).await {
            Ok(bus) => {
                tracing::info!(id = bus.id, bus_number = %bus.info.bus_number, "added bus");
                Action::Created(bus)
            }
            Err(err) => {
                tracing::error!(%operation, error = %err, "error adding bus");
                Action::CreateFailed
            }
        },
        Request::Update(bus) => match api.update(&bus).await {
            Ok(bus) => {
                tracing::info!(id = bus.id, "updated bus");
                Action::Updated(bus)
            }
            Err(err) => {
                tracing::error!(%operation, id = bus.id, error = %err, "error updating bus");
                Action::UpdateFailed
            }
        },
        Request::Delete(id) => match api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "deleted bus");
                Action::Deleted(id)
            }
            Err(err) => {
                tracing::error!(%operation, id, error = %err, "error deleting bus");
                Action::DeleteFailed
            }
        },
    }
}

/// Issues requests on a runtime and forwards their outcomes to the UI loop.
#[derive(Clone)]
pub struct Dispatcher {
    runtime: Handle,
    api: Arc<dyn BusApi>,
    tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(runtime: Handle, api: Arc<dyn BusApi>) -> (Self, UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { runtime, api, tx }, rx)
    }

    /// Spawn `request`; its action arrives on the receiver when it resolves.
    pub fn issue(&self, request: Request) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::debug!(operation = %request.operation(), "issuing request");
        self.runtime.spawn(async move {
            let action = perform(api.as_ref(), request).await;
            if tx.send(action).is_err() {
                tracing::warn!("roster loop gone; dropping response");
            }
        });
    }
}

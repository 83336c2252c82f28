//! Runs address service calls on the tokio runtime and posts each outcome
//! back to the UI event loop.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::contact::{Contact, ContactFields, ContactId};
use crate::service::{AddressService, ServiceError};
use crate::ui::events::AppEvent;

/// Bound on queued commands; the UI never has more than a handful in flight.
pub const COMMAND_QUEUE_DEPTH: usize = 32;

/// Tags a form submit so its outcome can be matched to the form that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCommand {
    LoadAll,
    Create {
        request: RequestId,
        fields: ContactFields,
    },
    Update {
        request: RequestId,
        id: ContactId,
        fields: ContactFields,
    },
    Delete {
        id: ContactId,
    },
}

pub type ServiceCommandSender = mpsc::Sender<ServiceCommand>;

/// Result of one [`ServiceCommand`].
#[derive(Debug)]
pub enum ServiceOutcome {
    Loaded(Result<Vec<Contact>, ServiceError>),
    Created {
        request: RequestId,
        result: Result<(), ServiceError>,
    },
    Updated {
        request: RequestId,
        result: Result<(), ServiceError>,
    },
    Deleted {
        id: ContactId,
        result: Result<(), ServiceError>,
    },
}

/// Start the worker task. Commands run one at a time in arrival order.
pub fn spawn_worker(
    runtime: &Handle,
    service: Arc<dyn AddressService>,
    events: std_mpsc::Sender<AppEvent>,
) -> (ServiceCommandSender, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let handle = runtime.spawn(run_worker(service, rx, events));
    (tx, handle)
}

async fn run_worker(
    service: Arc<dyn AddressService>,
    mut commands: mpsc::Receiver<ServiceCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "Executing service command");
        let outcome = execute(service.as_ref(), command).await;
        if events.send(AppEvent::Service(outcome)).is_err() {
            tracing::debug!("UI event loop gone, dropping service outcome");
            break;
        }
    }
    tracing::debug!("Service worker stopped");
}

/// Perform a single command against `service`.
pub async fn execute(service: &dyn AddressService, command: ServiceCommand) -> ServiceOutcome {
    match command {
        ServiceCommand::LoadAll => ServiceOutcome::Loaded(service.list().await),
        ServiceCommand::Create { request, fields } => ServiceOutcome::Created {
            request,
            result: service.create(&fields).await,
        },
        ServiceCommand::Update {
            request,
            id,
            fields,
        } => ServiceOutcome::Updated {
            request,
            result: service.update(&id, &fields).await,
        },
        ServiceCommand::Delete { id } => {
            let result = service.delete(&id).await;
            ServiceOutcome::Deleted { id, result }
        }
    }
}

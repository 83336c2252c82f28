mod common;

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;

use addrbook::contact::{ContactFields, ContactId};
use addrbook::service::{
    execute, spawn_worker, RequestId, ServiceCommand, ServiceError, ServiceOutcome,
};
use addrbook::ui::events::AppEvent;
use common::contact;
use common::memory_service::MemoryAddressService;
use tokio::runtime::Handle;

fn fields() -> ContactFields {
    ContactFields {
        name: "Katherine Johnson".to_string(),
        address: "1 Langley Blvd".to_string(),
        city: "Hampton".to_string(),
        state: "VA".to_string(),
        zip_code: 23681,
    }
}

/// Wait for the next service outcome posted to the UI channel.
async fn next_outcome(events: &std_mpsc::Receiver<AppEvent>) -> ServiceOutcome {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match events.try_recv() {
                Ok(AppEvent::Service(outcome)) => return outcome,
                Ok(_) => continue,
                Err(_) => tokio::time::sleep(Duration::from_millis(10)).await,
            }
        }
    })
    .await
    .expect("service outcome within timeout")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_reload_shows_one_new_entry() {
    let service = Arc::new(MemoryAddressService::with_contacts(vec![contact("1", "Alice")]));
    let (events_tx, events_rx) = std_mpsc::channel();
    let (commands, _worker) = spawn_worker(&Handle::current(), service.clone(), events_tx);

    commands.send(ServiceCommand::LoadAll).await.unwrap();
    let before = match next_outcome(&events_rx).await {
        ServiceOutcome::Loaded(Ok(contacts)) => contacts,
        other => panic!("Expected Loaded, got {other:?}"),
    };

    commands
        .send(ServiceCommand::Create {
            request: RequestId(1),
            fields: fields(),
        })
        .await
        .unwrap();
    assert!(matches!(
        next_outcome(&events_rx).await,
        ServiceOutcome::Created {
            request: RequestId(1),
            result: Ok(())
        }
    ));

    commands.send(ServiceCommand::LoadAll).await.unwrap();
    let after = match next_outcome(&events_rx).await {
        ServiceOutcome::Loaded(Ok(contacts)) => contacts,
        other => panic!("Expected Loaded, got {other:?}"),
    };

    assert_eq!(after.len(), before.len() + 1);
    let added: Vec<_> = after.iter().filter(|c| !before.contains(c)).collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].fields(), fields());
    assert_eq!(service.calls(), vec!["list", "create", "list"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn commands_run_in_arrival_order() {
    let service = Arc::new(MemoryAddressService::with_contacts(vec![
        contact("1", "Alice"),
        contact("2", "Bob"),
    ]));
    let (events_tx, events_rx) = std_mpsc::channel();
    let (commands, _worker) = spawn_worker(&Handle::current(), service.clone(), events_tx);

    commands
        .send(ServiceCommand::Delete {
            id: ContactId::new("2"),
        })
        .await
        .unwrap();
    commands.send(ServiceCommand::LoadAll).await.unwrap();

    match next_outcome(&events_rx).await {
        ServiceOutcome::Deleted { id, result } => {
            assert_eq!(id, ContactId::new("2"));
            assert!(result.is_ok());
        }
        other => panic!("Expected Deleted, got {other:?}"),
    }
    match next_outcome(&events_rx).await {
        ServiceOutcome::Loaded(Ok(contacts)) => assert_eq!(contacts.len(), 1),
        other => panic!("Expected Loaded, got {other:?}"),
    }
    assert_eq!(service.calls(), vec!["delete", "list"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_create_reaches_ui_and_list_is_unchanged() {
    let service = Arc::new(MemoryAddressService::with_contacts(vec![contact("1", "Alice")]));
    service.fail_creates();
    let (events_tx, events_rx) = std_mpsc::channel();
    let (commands, _worker) = spawn_worker(&Handle::current(), service.clone(), events_tx);

    commands
        .send(ServiceCommand::Create {
            request: RequestId(9),
            fields: fields(),
        })
        .await
        .unwrap();
    match next_outcome(&events_rx).await {
        ServiceOutcome::Created { request, result } => {
            assert_eq!(request, RequestId(9));
            assert!(matches!(result, Err(ServiceError::Status { status: 500, .. })));
        }
        other => panic!("Expected Created, got {other:?}"),
    }

    assert_eq!(service.contacts(), vec![contact("1", "Alice")]);
    assert_eq!(service.calls(), vec!["create"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn worker_stops_when_ui_is_gone() {
    let service = Arc::new(MemoryAddressService::default());
    let (events_tx, events_rx) = std_mpsc::channel();
    let (commands, worker) = spawn_worker(&Handle::current(), service, events_tx);
    drop(events_rx);

    commands.send(ServiceCommand::LoadAll).await.unwrap();
    tokio::time::timeout(Duration::from_secs(5), worker)
        .await
        .expect("worker exits")
        .unwrap();
}

#[tokio::test]
async fn delete_failure_is_reported_with_id() {
    let service = MemoryAddressService::with_contacts(vec![contact("1", "Alice")]);
    service.fail_deletes();

    let outcome = execute(
        &service,
        ServiceCommand::Delete {
            id: ContactId::new("1"),
        },
    )
    .await;
    match outcome {
        ServiceOutcome::Deleted { id, result } => {
            assert_eq!(id, ContactId::new("1"));
            assert!(matches!(result, Err(ServiceError::Status { status: 500, .. })));
        }
        other => panic!("Expected Deleted, got {other:?}"),
    }
    assert_eq!(service.contacts().len(), 1);
}

#[tokio::test]
async fn update_of_missing_contact_fails() {
    let service = MemoryAddressService::default();
    let outcome = execute(
        &service,
        ServiceCommand::Update {
            request: RequestId(3),
            id: ContactId::new("ghost"),
            fields: fields(),
        },
    )
    .await;
    assert!(matches!(
        outcome,
        ServiceOutcome::Updated {
            request: RequestId(3),
            result: Err(ServiceError::Status { status: 404, .. })
        }
    ));
}

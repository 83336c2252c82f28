//! Shared test utilities and service doubles.

#![allow(dead_code, unused_imports)]

pub mod memory_service;
pub mod mock_backend;

use addrbook::contact::{Contact, ContactId, Field};
use addrbook::service::{ServiceCommand, ServiceCommandSender};
use addrbook::ui::app::App;
use addrbook::ui::dialog::DialogIntent;
use std::net::TcpListener;
use tokio::sync::mpsc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn contact(id: &str, name: &str) -> Contact {
    Contact {
        id: ContactId::new(id),
        name: name.to_string(),
        address: format!("{} Main St", id),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: 62701,
    }
}

/// App wired to a command channel the test can inspect.
pub fn connected_app() -> (App, mpsc::Receiver<ServiceCommand>) {
    let (tx, rx) = command_channel();
    let mut app = App::new();
    app.set_command_sender(tx);
    (app, rx)
}

pub fn command_channel() -> (ServiceCommandSender, mpsc::Receiver<ServiceCommand>) {
    mpsc::channel(16)
}

/// Everything sent so far, without waiting.
pub fn drain(rx: &mut mpsc::Receiver<ServiceCommand>) -> Vec<ServiceCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Type into the open form, one value per field in form order. Starts at the
/// currently focused field (Name for a fresh form).
pub fn fill_form(app: &mut App, values: [&str; 5]) {
    for value in values {
        type_text(app, value);
        app.dispatch_dialog(DialogIntent::FocusNext);
    }
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.dispatch_dialog(DialogIntent::Input(ch));
    }
}

/// Clear the focused field.
pub fn clear_field(app: &mut App) {
    let len = app
        .dialog()
        .form()
        .map(|form| form.draft.get(form.focused).chars().count())
        .unwrap_or(0);
    for _ in 0..len {
        app.dispatch_dialog(DialogIntent::Backspace);
    }
}

pub fn focus(app: &mut App, field: Field) {
    for _ in 0..Field::ALL.len() {
        if app.dialog().form().map(|form| form.focused) == Some(field) {
            return;
        }
        app.dispatch_dialog(DialogIntent::FocusNext);
    }
}

//! Terminal front end: the address book screen, its dialogs, and the event loop.

pub mod app;
pub mod dialog;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub mod cli;
pub mod config;
pub mod contact;
pub mod logging;
pub mod service;
pub mod ui;

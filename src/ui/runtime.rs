use crate::config::Config;
use crate::service::{spawn_worker, AddressService};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the address book screen until the user quits.
///
/// Service calls run on `runtime`; anything still in flight when the loop
/// exits finishes in the background and its outcome is dropped.
pub fn run(config: &Config, runtime: &Handle, service: Arc<dyn AddressService>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let (commands, _worker) = spawn_worker(runtime, service, events.sender());

    let mut app = App::new();
    app.set_command_sender(commands);
    app.load_all();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Service(outcome)) => app.on_service_outcome(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Address book closed");
    drop(guard);
    Ok(())
}

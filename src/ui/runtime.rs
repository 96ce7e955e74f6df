//! The event loop: draw, wait for an event, apply it, repeat.
//!
//! Auth requests run on a tokio runtime so the UI never blocks on the
//! network; their results come back through the same event channel as
//! keystrokes and ticks.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::session::Session;
use crate::storage::Storage;
use crate::store::PostStore;
use crate::ui::app::{App, AuthCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    let storage = Storage::open(config.data_dir())?;
    let session = Session::restore(&storage);
    let store = PostStore::load(storage.clone());
    let mut app = App::new(storage, session, store);

    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let (auth_tx, mut auth_rx) = mpsc::channel::<AuthCommand>(4);
    let auth_client = AuthClient::new(config.auth.base_url.clone());
    let event_tx = events.sender();
    runtime.spawn(async move {
        while let Some(command) = auth_rx.recv().await {
            let result = match command {
                AuthCommand::Login { username, password } => {
                    auth_client.login(&username, &password).await
                }
                AuthCommand::Register { username, password } => {
                    auth_client.register(&username, &password).await
                }
            };
            let event = AppEvent::Auth(result.map_err(|err| err.to_string()));
            if event_tx.send(event).is_err() {
                break;
            }
        }
    });
    app.attach_auth(auth_tx);

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Auth(result)) => app.on_auth_result(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

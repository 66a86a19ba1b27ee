//! Terminal notes client.
//!
//! Loads notes from NOTES_API_URL (default http://localhost:3001/api/notes)
//! and reads commands from stdin. Store-bound actions run as their own
//! tasks so input keeps flowing while requests are in flight; all of them
//! are awaited before the process exits.

use notes_client::command::{self, Command, HELP};
use notes_client::render::render;
use notes_client::{Config, HttpNoteStore, NotesController};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

fn print_view(controller: &NotesController) {
    print!("{}", render(&controller.snapshot()));
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "[NOTES] Using store {} (notice {}s, importance {})",
        config.api_url,
        config.notice_duration.as_secs(),
        config.importance.as_ref()
    );

    let store = Arc::new(HttpNoteStore::new(&config.api_url, config.request_timeout));
    let controller = NotesController::new(store, &config);

    // Failure already surfaces as a notice in the view
    let _ = controller.load_initial().await;
    print_view(&controller);
    println!("{}", HELP);

    let mut actions = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // reap finished actions so the set does not grow unbounded
        while actions.try_join_next().is_some() {}

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("[NOTES] Failed to read stdin: {}", e);
                break;
            }
        };

        let cmd = match command::parse(&line) {
            Ok(cmd) => cmd,
            Err(command::ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::List => print_view(&controller),
            Command::Type(text) => {
                controller.set_new_note(text);
                print_view(&controller);
            }
            Command::Add(text) => {
                controller.set_new_note(text.clone());
                spawn_add(&mut actions, &controller, text);
            }
            Command::Save => {
                let text = controller.snapshot().new_note;
                spawn_add(&mut actions, &controller, text);
            }
            Command::Toggle(id) => {
                let controller = controller.clone();
                actions.spawn(async move {
                    if let Err(e) = controller.toggle_importance(&id).await {
                        log::debug!("[NOTES] toggle {}: {}", id, e);
                    }
                    print_view(&controller);
                });
            }
            Command::Filter => {
                controller.toggle_filter();
                print_view(&controller);
            }
            Command::Dismiss => {
                controller.dismiss_notice();
                print_view(&controller);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    if !actions.is_empty() {
        log::info!("[NOTES] Waiting for {} pending request(s)", actions.len());
    }
    while let Some(res) = actions.join_next().await {
        if let Err(e) = res {
            log::error!("[NOTES] Action task failed: {}", e);
        }
    }

    log::info!("[NOTES] Bye");
}

/// The text is captured by the caller so a later edit cannot change it.
fn spawn_add(actions: &mut JoinSet<()>, controller: &NotesController, text: String) {
    let controller = controller.clone();
    actions.spawn(async move {
        if let Err(e) = controller.add_note_with(text).await {
            log::debug!("[NOTES] add: {}", e);
        }
        print_view(&controller);
    });
}

//! `todolist-client` -- interactive terminal client for the todolist
//! service.
//!
//! Loads the list on startup and renders the local mirror after each
//! confirmed mutation.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default                 | Description        |
//! |---------------------|----------|-------------------------|--------------------|
//! | `TODOLIST_BASE_URL` | no       | `http://localhost:3000` | Server base URL    |
//!
//! # Commands
//!
//! ```text
//! list            re-fetch and show the list
//! add <text>      create a todo
//! toggle <id>     invert a todo's completed flag
//! rm <id>         delete a todo
//! quit            exit
//! ```

use std::io::{self, BufRead, Write};

use todolist_client::client::TodoClient;
use todolist_client::session::TodoSession;
use todolist_core::types::DbId;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("TODOLIST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    tracing::info!(base_url = %base_url, "Starting todolist-client");

    let mut session = TodoSession::new(TodoClient::new(&base_url));

    println!("Loading todos...");
    session.load().await;
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                break;
            }
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => {
                session.load().await;
                render(&session);
            }
            "add" => {
                if session.create(rest).await {
                    render(&session);
                } else {
                    println!("Nothing added (empty text or server error).");
                }
            }
            "toggle" => match parse_id(rest) {
                Some(id) => {
                    if session.toggle(id).await {
                        render(&session);
                    } else {
                        println!("Toggle failed for id {id}.");
                    }
                }
                None => println!("Usage: toggle <id>"),
            },
            "rm" => match parse_id(rest) {
                Some(id) => {
                    if session.delete(id).await {
                        render(&session);
                    } else {
                        println!("Nothing deleted for id {id}.");
                    }
                }
                None => println!("Usage: rm <id>"),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command: {other}"),
        }
    }
}

fn parse_id(text: &str) -> Option<DbId> {
    text.parse().ok()
}

/// Print the mirrored list with the total / completed / remaining counts.
fn render(session: &TodoSession) {
    if session.todos().is_empty() {
        println!("No todos yet.");
        return;
    }

    for todo in session.todos() {
        let mark = if todo.completed { 'x' } else { ' ' };
        println!(
            "[{mark}] {:>4}  {}  ({})",
            todo.id,
            todo.description,
            todo.created_at.format("%Y-%m-%d")
        );
    }

    let counts = session.counts();
    println!(
        "{} total, {} completed, {} remaining",
        counts.total, counts.completed, counts.remaining
    );
}

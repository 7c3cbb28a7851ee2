//! Terminal front-end for the todo feed.

use std::io::{self, BufRead, Write};

use todo_client::{GetParams, TodoController, TodoFeed};
use uuid::Uuid;

fn main() {
    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let controller = TodoController::new(&base_url);

    let mut feed = TodoFeed::new();
    match controller.get(GetParams::default()) {
        Ok(page) => feed.loaded(page),
        Err(err) => {
            eprintln!("failed to load todos from {base_url}: {err}");
            std::process::exit(1);
        }
    }

    println!("todo feed at {base_url}");
    println!("commands: add <content> | toggle <id> | rm <id> | search [text] | more | list | quit");
    render(&feed);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "list" => render(&feed),
            "add" => {
                // Wait for the server-assigned id and date before showing it.
                match controller.create(rest) {
                    Ok(todo) => {
                        feed.created(todo);
                        render(&feed);
                    }
                    Err(err) => eprintln!("create failed: {err}"),
                }
            }
            "toggle" => match resolve_id(&feed, rest) {
                Some(id) => {
                    // Optimistic: flip locally, report failures without rollback.
                    feed.toggled(id);
                    if let Err(err) = controller.toggle_done(&id.to_string()) {
                        eprintln!("toggle failed: {err}");
                    }
                    render(&feed);
                }
                None => eprintln!("no todo matches id '{rest}'"),
            },
            "rm" => match resolve_id(&feed, rest) {
                Some(id) => {
                    feed.removed(id);
                    if let Err(err) = controller.delete_by_id(&id.to_string()) {
                        eprintln!("delete failed: {err}");
                    }
                    render(&feed);
                }
                None => eprintln!("no todo matches id '{rest}'"),
            },
            "search" => {
                feed.set_search(rest);
                render(&feed);
            }
            "more" => match feed.next_page() {
                Some(page) => match controller.get(GetParams {
                    page: Some(page),
                    limit: None,
                }) {
                    Ok(result) => {
                        feed.appended(result);
                        render(&feed);
                    }
                    Err(err) => eprintln!("load more failed: {err}"),
                },
                None => println!("no more pages"),
            },
            other => eprintln!("unknown command: {other}"),
        }
    }
}

fn render(feed: &TodoFeed) {
    let visible = feed.visible();
    if visible.is_empty() {
        println!("  (no todos)");
    }
    for todo in &visible {
        let mark = if todo.done { "x" } else { " " };
        let short_id = &todo.id.to_string()[..4];
        println!("  [{mark}] {short_id} {}", todo.content);
    }
    if feed.has_more_pages() {
        println!("  -- page {} of more, 'more' to load --", feed.page());
    }
}

/// Match a full uuid or a unique 4+ character prefix against the loaded list.
fn resolve_id(feed: &TodoFeed, input: &str) -> Option<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Some(id);
    }
    if input.is_empty() {
        return None;
    }
    let mut matches = feed
        .todos()
        .iter()
        .filter(|todo| todo.id.to_string().starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(todo), None) => Some(todo.id),
        _ => None,
    }
}

//! Application shell: wires the store and view together and runs a
//! line-based REPL over them. Holds no state of its own — everything lives
//! in the view and its store, and is gone when the process exits.

use std::io::{self, BufRead, Write};

use clap::Parser;
use task_core::{TaskClient, TaskListView, TaskStore, UreqTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "task-cli", about = "Interactive client for the task-list service")]
struct Cli {
    /// Base URL of the task API.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Diagnostic only — the value has no effect on client behavior.
    match std::env::var("DATABASE_URL") {
        Ok(url) => info!(%url, "database url"),
        Err(_) => info!("database url not set"),
    }

    let store = TaskStore::new(TaskClient::new(&cli.base_url), UreqTransport::new());
    let mut view = TaskListView::mount(store);

    let mut stdout = io::stdout();
    write!(stdout, "{}", view.render())?;
    print_help(&mut stdout)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "list" | "ls" => {}
            "add" => {
                if rest.is_empty() {
                    writeln!(stdout, "usage: add <title>")?;
                } else {
                    view.set_draft(rest);
                    view.submit_draft();
                }
            }
            "edit" => match rest.parse::<i64>() {
                Ok(id) => view.begin_edit(id),
                Err(_) => writeln!(stdout, "usage: edit <id>")?,
            },
            "buf" => view.set_edit_buffer(rest),
            "save" => view.save_edit(),
            "cancel" => view.cancel_edit(),
            "del" => match rest.parse::<i64>() {
                Ok(id) => view.delete(id),
                Err(_) => writeln!(stdout, "usage: del <id>")?,
            },
            "refresh" => view.refresh(),
            "help" => print_help(&mut stdout)?,
            "quit" | "exit" => break,
            other => writeln!(stdout, "unknown command: {other} (try 'help')")?,
        }

        write!(stdout, "{}", view.render())?;
        stdout.flush()?;
    }

    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "commands: list | add <title> | edit <id> | buf <text> | save | cancel | del <id> | refresh | help | quit"
    )
}

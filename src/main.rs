//! Task Tracker - Main Entry Point
//!
//! Parses the command line, wires storage into the service, and hands
//! control to the interactive menu loop. The actual implementation is in
//! the `tasktrack` library.

use anyhow::Result;
use clap::Parser;
use tasktrack::{Storage, TaskService, menu};

/// Personal task tracker with a JSON file store and an interactive menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    #[arg(default_value = "tasks.json")]
    file: String,

    /// Commit the data file to git after each change
    #[arg(long)]
    sync_git: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let service = TaskService::new(Storage::new(&args.file, args.sync_git));
    menu::run(&service)
}

//! Interactive menu shell
//!
//! A single-threaded read-evaluate-print loop: one blocking line-read per
//! prompt, one service call per dispatch. Input mistakes (bad menu choice,
//! non-numeric id) abort the current operation and return to the menu;
//! only storage failures escape the loop.

use crate::formatting::format_tasks;
use crate::service::TaskService;
use crate::task::{Priority, Status};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nTask Management System
1. Add a Task
2. View All Tasks
3. View Pending Tasks
4. View Completed Tasks
5. Update a Task
6. Delete a Task
7. Search Tasks
8. View Tasks Due Soon
9. Exit";

/// Run the menu loop until the user picks Exit (or stdin closes)
pub fn run(service: &TaskService) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_loop(service, &mut input)
}

fn run_loop(service: &TaskService, input: &mut impl BufRead) -> Result<()> {
    loop {
        println!("{}", MENU);

        let Some(choice) = prompt(input, "\nEnter your choice: ")? else {
            // stdin closed; treat like Exit
            break;
        };

        match choice.as_str() {
            "1" => add_task(service, input)?,
            "2" => view(service, None)?,
            "3" => view(service, Some(Status::Pending))?,
            "4" => view(service, Some(Status::Completed))?,
            "5" => update_task(service, input)?,
            "6" => delete_task(service, input)?,
            "7" => search_tasks(service, input)?,
            "8" => due_soon(service)?,
            "9" => {
                println!("\nExiting Task Manager. Goodbye!");
                break;
            }
            _ => println!("\nInvalid choice, please try again."),
        }
    }

    Ok(())
}

fn add_task(service: &TaskService, input: &mut impl BufRead) -> Result<()> {
    let description = read_line(input, "Enter task description: ")?;

    let deadline_input = read_line(input, "Enter deadline (YYYY-MM-DD) or press Enter to skip: ")?;
    let deadline = if deadline_input.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&deadline_input, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                // A typo must not silently become "no deadline"
                println!(
                    "\nInvalid date '{}'. Use YYYY-MM-DD (e.g., 2025-03-15).",
                    deadline_input
                );
                return Ok(());
            }
        }
    };

    let priority = Priority::from(read_line(input, "Enter priority (high/medium/low): ")?);

    service.add(description, deadline, priority)?;
    println!("\nTask added successfully!");
    Ok(())
}

fn view(service: &TaskService, filter_by: Option<Status>) -> Result<()> {
    let tasks = service.list(filter_by, None)?;
    println!("{}", format_tasks(&tasks, "\nTask List:", "\nNo tasks found."));
    Ok(())
}

fn update_task(service: &TaskService, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_task_id(input, "Enter task ID to update: ")? else {
        return Ok(());
    };

    let new_description = read_optional(input, "Enter new description (leave empty to keep unchanged): ")?;
    let new_status = read_optional(input, "Enter new status (pending/completed, leave empty to keep unchanged): ")?
        .map(Status::from);
    let new_priority = read_optional(input, "Enter new priority (high/medium/low, leave empty to keep unchanged): ")?
        .map(Priority::from);

    if service.update(id, new_description, new_status, new_priority)? {
        println!("\nTask updated successfully!");
    } else {
        println!("\nTask ID not found!");
    }
    Ok(())
}

fn delete_task(service: &TaskService, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_task_id(input, "Enter task ID to delete: ")? else {
        return Ok(());
    };

    if service.delete(id)? {
        println!("\nTask deleted successfully!");
    } else {
        println!("\nTask ID not found!");
    }
    Ok(())
}

fn search_tasks(service: &TaskService, input: &mut impl BufRead) -> Result<()> {
    let keyword = read_line(input, "Enter keyword to search: ")?;
    let tasks = service.search(&keyword)?;
    println!(
        "{}",
        format_tasks(&tasks, "\nSearch Results:", "\nNo matching tasks found.")
    );
    Ok(())
}

fn due_soon(service: &TaskService) -> Result<()> {
    let tasks = service.due_soon()?;
    println!(
        "{}",
        format_tasks(&tasks, "\nTasks Due Soon:", "\nNo urgent tasks.")
    );
    Ok(())
}

/// Prompt for a line; `None` means stdin reached end-of-file
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a line, treating end-of-file as an empty line
fn read_line(input: &mut impl BufRead, message: &str) -> Result<String> {
    Ok(prompt(input, message)?.unwrap_or_default())
}

/// Prompt where an empty line means "leave unchanged"
fn read_optional(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    let line = read_line(input, message)?;
    Ok(if line.is_empty() { None } else { Some(line) })
}

/// Prompt for a numeric task id
///
/// Non-numeric input is reported and the caller aborts the operation
/// before any further prompts, with no side effects.
fn read_task_id(input: &mut impl BufRead, message: &str) -> Result<Option<u32>> {
    let line = read_line(input, message)?;
    match line.parse::<u32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("\nInvalid input. Please enter a valid task ID.");
            Ok(None)
        }
    }
}

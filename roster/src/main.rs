//! Interactive terminal front end for the roster library.
//!
//! Presentation plumbing only: parses lines into session intents, renders
//! the projected table, and prints notifications. All roster rules live in
//! the `roster` library; this binary never touches the store directly.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use roster::core::invariants::validate_invariants;
use roster::core::types::{Notification, NotificationKind, SortDirection, SortKey, SortSpec};
use roster::record::{DraftRecord, EmployeeId};
use roster::session::{RosterSession, SubmitOutcome};

const SAMPLE_EMPLOYEES: [(&str, &str, &str, &str, &str); 5] = [
    ("Ava Chen", "ava.chen@example.com", "5550100001", "Engineer", "Engineering"),
    ("Liam Patel", "liam.patel@example.com", "5550100002", "Designer", "Design"),
    ("Maya Okafor", "maya.okafor@example.com", "5550100003", "Recruiter", "People"),
    ("Noah Kim", "noah.kim@example.com", "5550100004", "Accountant", "Finance"),
    ("Sofia Reyes", "sofia.reyes@example.com", "5550100005", "Engineer", "Engineering"),
];

#[derive(Parser)]
#[command(name = "roster", version, about = "In-memory employee roster editor")]
struct Cli {
    /// Seed the roster with this many sample employees.
    #[arg(long, default_value_t = 0)]
    seed: usize,
}

type Input = io::Lines<io::StdinLock<'static>>;

fn main() {
    roster::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = RosterSession::new();
    seed(&mut session, cli.seed)?;

    let mut input = io::stdin().lock().lines();
    println!("Employee Management System (type 'help' for commands)");

    loop {
        print!("> ");
        io::stdout().flush().context("flush prompt")?;
        let Some(line) = input.next() else {
            println!();
            break;
        };
        let line = line.context("read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = split_command(line);
        let result = match command {
            "list" => {
                render_table(&session);
                Ok(())
            }
            "search" => {
                session.set_search(rest);
                render_table(&session);
                Ok(())
            }
            "sort" => cmd_sort(&mut session, rest),
            "add" => cmd_add(&mut session, &mut input),
            "edit" => cmd_edit(&mut session, &mut input, rest),
            "delete" => cmd_delete(&mut session, &mut input, rest),
            "check" => {
                cmd_check(&session);
                Ok(())
            }
            "export" => cmd_export(&session),
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command '{other}' (try 'help')");
                Ok(())
            }
        };
        if let Err(err) = result {
            println!("error: {err:#}");
        }
    }

    Ok(())
}

/// Insert sample employees through the normal create workflow.
fn seed(session: &mut RosterSession, count: usize) -> Result<()> {
    for index in 0..count {
        let (name, email, phone, position, department) =
            SAMPLE_EMPLOYEES[index % SAMPLE_EMPLOYEES.len()];
        session.open_create()?;
        let outcome = session.submit(DraftRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            position: position.to_string(),
            department: department.to_string(),
        })?;
        if !matches!(outcome, SubmitOutcome::Created(_)) {
            bail!("sample draft rejected for '{name}'");
        }
    }
    Ok(())
}

fn cmd_sort(session: &mut RosterSession, rest: &str) -> Result<()> {
    let key = match rest {
        "name" => SortKey::Name,
        "department" => SortKey::Department,
        _ => {
            println!("usage: sort name|department");
            return Ok(());
        }
    };
    session.toggle_sort(key);
    render_table(session);
    Ok(())
}

fn cmd_add(session: &mut RosterSession, input: &mut Input) -> Result<()> {
    session.open_create()?;
    form_loop(session, input)
}

fn cmd_edit(session: &mut RosterSession, input: &mut Input, rest: &str) -> Result<()> {
    let id = parse_id(rest)?;
    session.open_edit(id)?;
    form_loop(session, input)
}

fn cmd_delete(session: &mut RosterSession, input: &mut Input, rest: &str) -> Result<()> {
    let id = parse_id(rest)?;
    session.request_delete(id)?;

    print!("Are you sure you want to delete this employee? [y/N] ");
    io::stdout().flush().context("flush prompt")?;
    let answer = match input.next() {
        Some(line) => line.context("read confirmation")?,
        None => String::new(),
    };

    if answer.trim().eq_ignore_ascii_case("y") {
        session.confirm_delete()?;
        println!("employee {id} deleted");
    } else {
        session.cancel_delete()?;
        println!("cancelled");
    }
    Ok(())
}

fn cmd_check(session: &RosterSession) {
    let errors = validate_invariants(session.records());
    if errors.is_empty() {
        println!("ok: {} records, no invariant violations", session.records().len());
        return;
    }
    println!("invariant violations:");
    for error in &errors {
        println!("- {error}");
    }
}

fn cmd_export(session: &RosterSession) -> Result<()> {
    let payload = serde_json::to_string_pretty(session.records()).context("serialize roster")?;
    println!("{payload}");
    Ok(())
}

/// Prompt the five fields and submit until accepted or the user aborts.
///
/// Enter keeps the value shown in brackets, '-' clears it, end-of-input
/// cancels the form. On rejection the retained draft becomes the next
/// round's defaults.
fn form_loop(session: &mut RosterSession, input: &mut Input) -> Result<()> {
    loop {
        let Some(draft) = prompt_draft(session.draft().clone(), input)? else {
            session.cancel()?;
            println!("cancelled");
            return Ok(());
        };

        let outcome = session.submit(draft)?;
        print_notification(&outcome.notification());
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                for (field, message) in errors.iter() {
                    println!("  {}: {}", field.label(), message);
                }
            }
            SubmitOutcome::Created(record) | SubmitOutcome::Updated(record) => {
                println!("stored employee {}", record.id);
                render_table(session);
                return Ok(());
            }
        }
    }
}

fn prompt_draft(mut draft: DraftRecord, input: &mut Input) -> Result<Option<DraftRecord>> {
    let fields: [(&str, &mut String); 5] = [
        ("Name", &mut draft.name),
        ("Email", &mut draft.email),
        ("Phone", &mut draft.phone),
        ("Position", &mut draft.position),
        ("Department", &mut draft.department),
    ];

    for (label, value) in fields {
        print!("{label} [{value}]: ");
        io::stdout().flush().context("flush prompt")?;
        let Some(line) = input.next() else {
            return Ok(None);
        };
        let line = line.context("read field")?;
        let line = line.trim();
        if line == "-" {
            value.clear();
        } else if !line.is_empty() {
            *value = line.to_string();
        }
    }
    Ok(Some(draft))
}

fn parse_id(rest: &str) -> Result<EmployeeId> {
    if rest.is_empty() {
        bail!("expected an employee id (see 'list')");
    }
    rest.parse()
        .with_context(|| format!("invalid employee id '{rest}'"))
}

fn print_notification(notification: &Notification) {
    match notification.kind {
        NotificationKind::Success => println!("[ok] {}", notification.message),
        NotificationKind::Error => println!("[!] {}", notification.message),
    }
}

fn render_table(session: &RosterSession) {
    let visible = session.visible();
    let sort = session.sort();
    let headers = [
        "Id".to_string(),
        format!("Name {}", sort_marker(sort, SortKey::Name)),
        "Email".to_string(),
        "Phone".to_string(),
        "Position".to_string(),
        format!("Department {}", sort_marker(sort, SortKey::Department)),
    ];
    let rows: Vec<[String; 6]> = visible
        .iter()
        .map(|record| {
            [
                record.id.to_string(),
                record.name.clone(),
                record.email.clone(),
                record.phone.clone(),
                record.position.clone(),
                record.department.clone(),
            ]
        })
        .collect();

    let mut widths = headers.each_ref().map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&headers, &widths);
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", separator.join("-+-"));
    for row in &rows {
        print_row(row, &widths);
    }
    println!("{} of {} employees", rows.len(), session.records().len());
}

fn print_row(cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{}", line.trim_end());
}

/// Header marker: the active key shows its direction, other sortable
/// columns show the neutral arrow.
fn sort_marker(sort: SortSpec, key: SortKey) -> &'static str {
    if sort.key != Some(key) {
        return "↕";
    }
    match sort.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                  show the roster (current search/sort applied)");
    println!("  search [term]         filter by name or department; no term clears");
    println!("  sort name|department  toggle sorting on a column");
    println!("  add                   create an employee (enter keeps [shown], '-' clears)");
    println!("  edit <id>             edit an employee");
    println!("  delete <id>           delete an employee (asks for confirmation)");
    println!("  check                 verify roster invariants");
    println!("  export                print the roster as JSON");
    println!("  quit                  exit");
}

use clap::Parser;

use crate::cli::{self, command::{COMMANDS_HELP, Cli, Command, parse_input}};
use crate::domain::{ContactBook, Reply};
use crate::errors::AppError;

pub fn run_app() -> Result<(), AppError> {
    let _cli = Cli::parse();

    let mut book = ContactBook::new();

    println!("Welcome to the assistant bot!");

    loop {
        let Some(line) = cli::prompt("Enter a command: ")? else {
            // stdin closed, same as an explicit 'close'
            println!("Good bye!");
            break;
        };

        let (command, args) = parse_input(&line);

        if command.is_empty() {
            continue;
        }

        match Command::parse(&command) {
            Some(Command::Close) => {
                println!("Good bye!");
                break;
            }
            Some(Command::Hello) => cli::print_success("How can I help you?"),
            Some(Command::All) => print_records(&book),
            Some(Command::Help) => println!("{}", render_help()),
            Some(command @ Command::Add) => report(command, book.add_contact(&args)),
            Some(command @ Command::Change) => report(command, book.update_contact(&args)),
            Some(command @ Command::Phone) => report(command, book.get_users_phone(&args)),
            None => {
                cli::print_error("Invalid command. Please use one of the list below:");
                println!("{}", render_help());
            }
        }
    }

    Ok(())
}

fn report(command: Command, result: Result<Reply, AppError>) {
    match result {
        Ok(Reply::Message(message)) => cli::print_success(&message),
        Ok(Reply::Warning(warning)) => cli::print_error(&warning),
        Err(err) => cli::print_error(&render_error(command, &err)),
    }
}

/// Uniform error rendering: usage errors get the command's syntax hint
/// appended, domain errors (not-found, validation) do not.
fn render_error(command: Command, err: &AppError) -> String {
    match (err, command.usage()) {
        (AppError::Usage(_), Some(usage)) => format!("{err}\n{usage}"),
        _ => err.to_string(),
    }
}

fn print_records(book: &ContactBook) {
    if book.is_empty() {
        cli::print_error("There is no records yet.");
        return;
    }

    let rows: Vec<(String, String)> = book
        .records()
        .into_iter()
        .map(|contact| (contact.name, contact.phone))
        .collect();

    println!("{}", cli::render_table(["User", "Phone"], &rows));
}

fn render_help() -> String {
    let rows: Vec<(String, String)> = COMMANDS_HELP
        .iter()
        .map(|(command, usage)| (command.to_string(), usage.to_string()))
        .collect();

    cli::render_table(["Command", "Usage"], &rows)
}

pub mod command;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use crate::errors::AppError;

/// Indent prefix for bot replies, keeps them visually apart from the prompt.
pub const IDENT: &str = " ";

// OUTPUT FUNCTIONS
pub fn print_success(message: &str) {
    println!("{IDENT}{message}");
}

pub fn print_error(message: &str) {
    println!("{IDENT}{message}");
}

pub fn render_table(headers: [&str; 2], rows: &[(String, String)]) -> String {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain([headers[0].chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<width$}  {}\n",
        headers[0],
        headers[1],
        width = key_width
    ));
    out.push_str(&format!(
        "{:<width$}  {}\n",
        "-".repeat(headers[0].chars().count()),
        "-".repeat(headers[1].chars().count()),
        width = key_width
    ));

    for (key, value) in rows {
        out.push_str(&format!("{key:<width$}  {value}\n", width = key_width));
    }

    // Drop the trailing newline, the caller prints with println!
    out.pop();
    out
}

// INPUT FUNCTIONS
pub fn prompt(text: &str) -> Result<Option<String>, AppError> {
    print!("{text}");
    io::stdout().flush()?;
    get_input()
}

/// Read one line from stdin. `None` means the stream is closed.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

use clap::Parser;

/// Argv surface. The bot itself is driven from the interactive prompt,
/// so the only flags are the ones clap gives every binary.
#[derive(Parser, Debug)]
#[command(name = "contact-bot", version, about = "Interactive contact assistant bot")]
pub struct Cli {}

/// Static command reference, rendered by `help` and appended to usage errors.
pub const COMMANDS_HELP: &[(&str, &str)] = &[
    ("hello", "'hello' just to get nice greeting :)"),
    (
        "add",
        "'add <username> <phone number>' to add user with it's phone.",
    ),
    (
        "change",
        "'change <username> <phone number>' to update username's phone.",
    ),
    ("phone", "'phone <username>' to get phone of the user."),
    ("all", "'all' to get list of all users and their phones"),
    (
        "exit or close",
        "'close' or 'exit' to stop the assistant.",
    ),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Help,
    Close,
}

impl Command {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "hello" => Some(Command::Hello),
            "add" => Some(Command::Add),
            "change" => Some(Command::Change),
            "phone" => Some(Command::Phone),
            "all" => Some(Command::All),
            "help" => Some(Command::Help),
            "close" | "exit" => Some(Command::Close),
            _ => None,
        }
    }

    /// Help-table line for this command, used as the usage hint.
    pub fn usage(&self) -> Option<&'static str> {
        let key = match self {
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            _ => return None,
        };

        COMMANDS_HELP
            .iter()
            .find(|(command, _)| *command == key)
            .map(|(_, usage)| *usage)
    }
}

/// Split a raw input line into a lowercased command token and its args.
/// An empty or whitespace-only line yields an empty command.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();

    let Some(command) = parts.next() else {
        return (String::new(), Vec::new());
    };

    (
        command.trim().to_lowercase(),
        parts.map(str::to_string).collect(),
    )
}

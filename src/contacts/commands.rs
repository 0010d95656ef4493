//! Command layer of the assistant bot: parsing and dispatch.
//!
//! Every outcome, including validation and lookup failures, is rendered as
//! reply text. The caller only decides how to print it and when to stop.

use super::{Book, ContactError};

/// Recognized bot commands, in help display order.
pub const COMMAND_HELP: [(&str, &str); 6] = [
    ("hello", "Use format 'hello' just to get a nice greeting :)"),
    (
        "add",
        "Use format 'add <username> <phone number>' to add a user with their phone.",
    ),
    (
        "change",
        "Use format 'change <username> <phone number>' to update the username's phone.",
    ),
    ("phone", "Use format 'phone <username>' to get the phone of the user."),
    ("all", "Use format 'all' to get the list of all users and their phones."),
    (
        "exit or close",
        "Use format 'close' or 'exit' to stop the assistant.",
    ),
];

/// One reply from the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Normal output, one line per entry.
    Message(Vec<String>),

    /// A failure rendered as text, optionally followed by a usage hint.
    Error(Vec<String>),

    /// The farewell; the caller should stop the loop.
    Exit(String),

    /// Empty input: nothing to say.
    Silence,
}

impl Reply {
    fn message<S: Into<String>>(text: S) -> Self {
        Reply::Message(vec![text.into()])
    }

    fn error<S: Into<String>>(text: S) -> Self {
        Reply::Error(vec![text.into()])
    }
}

/// Splits a raw input line into a lowercased command and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace().map(String::from);
    let command = parts.next().unwrap_or_default().to_lowercase();
    (command, parts.collect())
}

/// Usage hint for a command, when one exists.
fn usage_hint(command: &str) -> Option<String> {
    let key = if command == "close" || command == "exit" {
        "exit or close"
    } else {
        command
    };
    COMMAND_HELP
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, help)| help.to_string())
}

/// Renders a contact failure, appending the usage hint for argument errors.
fn render_error(command: &str, err: ContactError) -> Reply {
    let mut lines = vec![err.to_string()];
    let is_usage_error = matches!(
        err,
        ContactError::MissingNameAndPhone | ContactError::MissingName
    );
    if is_usage_error {
        if let Some(hint) = usage_hint(command) {
            lines.push(hint);
        }
    }
    Reply::Error(lines)
}

/// All help lines, one per command.
fn help_lines() -> Vec<String> {
    COMMAND_HELP
        .iter()
        .map(|(name, help)| format!("{}: {}", name, help))
        .collect()
}

fn two_args(args: &[String]) -> Result<(&str, &str), ContactError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(ContactError::MissingNameAndPhone),
    }
}

/// Executes one input line against the book and returns the reply.
pub fn handle(book: &mut Book, line: &str) -> Reply {
    let (command, args) = parse_input(line);

    match command.as_str() {
        "" => Reply::Silence,
        "close" | "exit" => Reply::Exit("Good bye!".to_string()),
        "hello" => Reply::message("How can I help you?"),
        "help" => Reply::Message(help_lines()),
        "add" => match two_args(&args).and_then(|(name, phone)| book.add(name, phone)) {
            Ok(text) => Reply::message(text),
            Err(err) => render_error("add", err),
        },
        "change" => match two_args(&args).and_then(|(name, phone)| book.change(name, phone)) {
            Ok(text) => Reply::message(text),
            Err(err) => render_error("change", err),
        },
        "phone" => {
            let result = match args.first() {
                Some(name) => book.phone(name),
                None => Err(ContactError::MissingName),
            };
            match result {
                Ok(text) => Reply::message(text),
                Err(err) => render_error("phone", err),
            }
        }
        "all" => {
            if book.is_empty() {
                Reply::error("There is no records yet.")
            } else {
                Reply::Message(
                    book.all()
                        .map(|(name, phone)| format!("{}: {}", name, phone))
                        .collect(),
                )
            }
        }
        _ => {
            let mut lines = vec!["Invalid command. Please use one of the list below:".to_string()];
            lines.extend(help_lines());
            Reply::Error(lines)
        }
    }
}

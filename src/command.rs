use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// One line of user input, split into a verb and its argument.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Read,
    Insert(String),
    Update(String),
    /// The argument is accepted and ignored.
    Delete(String),
    Search(String),
    Save,
    Exit,
}

impl Command {
    /// Parses a raw input line (without its terminator).
    ///
    /// Only the exact line `exit` quits. Everything else is split at the
    /// first space: the verb before it, the argument verbatim after it.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        if input == "exit" {
            return Ok(Command::Exit);
        }

        let (verb, argument) = input.split_once(' ').unwrap_or((input, ""));
        let argument = argument.to_string();

        match verb {
            "read" => Ok(Command::Read),
            "insert" => Ok(Command::Insert(argument)),
            "update" => Ok(Command::Update(argument)),
            "delete" => Ok(Command::Delete(argument)),
            "search" => Ok(Command::Search(argument)),
            "save" => Ok(Command::Save),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Command::Read => "read",
            Command::Insert(_) => "insert",
            Command::Update(_) => "update",
            Command::Delete(_) => "delete",
            Command::Search(_) => "search",
            Command::Save => "save",
            Command::Exit => "exit",
        }
    }
}

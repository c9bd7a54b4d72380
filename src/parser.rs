// parser.rs

use std::path::PathBuf;
use thiserror::Error;

use crate::transform::DEFAULT_SEPARATOR;

pub const COMMAND_NAMES: [&str; 11] = [
    "upper", "lower", "reverse", "repeat", "preview", "file", "history", "clear", "help", "quit", "exit",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Echo(String),
    Preview(String),
    Upper(String),
    Lower(String),
    Reverse(String),
    Repeat { text: String, times: i64, separator: String },
    File(PathBuf),
    History(Option<usize>),
    Clear,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(":{0}: unknown command (try :help)")]
    UnknownCommand(String),
    #[error(":{command}: missing {what}")]
    MissingArgument { command: &'static str, what: &'static str },
    #[error(":{command}: too many arguments")]
    TooManyArguments { command: &'static str },
    #[error(":{command}: invalid number '{value}'")]
    InvalidNumber { command: &'static str, value: String },
    #[error("unterminated {0} quote")]
    UnterminatedQuote(&'static str),
}

/// Parses one interactive line. Blank lines yield `None`; lines that do not
/// start with `:` are echoed as typed.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }
    let Some(body) = trimmed.strip_prefix(':') else {
        return Ok(Some(Command::Echo(line.to_string())));
    };
    let (word, rest) = match body.find(char::is_whitespace) {
        Some(i) => (&body[..i], body[i..].trim_start()),
        None => (body, ""),
    };
    let command = match word {
        "upper" => Command::Upper(text_arg("upper", rest)?),
        "lower" => Command::Lower(text_arg("lower", rest)?),
        "reverse" => Command::Reverse(text_arg("reverse", rest)?),
        "preview" => Command::Preview(text_arg("preview", rest)?),
        "repeat" => parse_repeat(rest)?,
        "file" => match split_quoted(rest)?.as_slice() {
            [] => return Err(ParseError::MissingArgument { command: "file", what: "path" }),
            [path] => Command::File(PathBuf::from(path)),
            _ => return Err(ParseError::TooManyArguments { command: "file" }),
        },
        "history" => match split_quoted(rest)?.as_slice() {
            [] => Command::History(None),
            [n] => Command::History(Some(n.parse().map_err(|_| ParseError::InvalidNumber {
                command: "history",
                value: n.clone(),
            })?)),
            _ => return Err(ParseError::TooManyArguments { command: "history" }),
        },
        "clear" => no_args("clear", rest, Command::Clear)?,
        "help" => no_args("help", rest, Command::Help)?,
        "quit" => no_args("quit", rest, Command::Quit)?,
        "exit" => no_args("exit", rest, Command::Quit)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn text_arg(command: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument { command, what: "text" });
    }
    Ok(rest.to_string())
}

fn no_args(command: &'static str, rest: &str, parsed: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::TooManyArguments { command })
    }
}

fn parse_repeat(rest: &str) -> Result<Command, ParseError> {
    let tokens = split_quoted(rest)?;
    let (times, text, separator) = match tokens.as_slice() {
        [] => return Err(ParseError::MissingArgument { command: "repeat", what: "count" }),
        [_] => return Err(ParseError::MissingArgument { command: "repeat", what: "text" }),
        [times, text] => (times, text.clone(), DEFAULT_SEPARATOR.to_string()),
        [times, text, sep] => (times, text.clone(), sep.clone()),
        _ => return Err(ParseError::TooManyArguments { command: "repeat" }),
    };
    let times = times.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        command: "repeat",
        value: times.clone(),
    })?;
    Ok(Command::Repeat { text, times, separator })
}

/// Splits on whitespace, honouring single quotes (literal), double quotes
/// (`\"` and `\\` escapes) and bare backslash escapes. `""` is an empty token.
pub fn split_quoted(line: &str) -> Result<Vec<String>, ParseError> {
    enum State {
        Normal,
        Single,
        Double,
    }
    let mut tokens = Vec::new();
    let mut cur = String::new();
    let mut in_token = false;
    let mut state = State::Normal;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    in_token = true;
                }
                '"' => {
                    state = State::Double;
                    in_token = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut cur));
                        in_token = false;
                    }
                }
                _ => {
                    cur.push(ch);
                    in_token = true;
                }
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&'\\') | Some(&'"') => {
                        if let Some(next) = chars.next() {
                            cur.push(next);
                        }
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    match state {
        State::Single => return Err(ParseError::UnterminatedQuote("single")),
        State::Double => return Err(ParseError::UnterminatedQuote("double")),
        State::Normal => {}
    }
    if in_token {
        tokens.push(cur);
    }
    Ok(tokens)
}

// completion.rs

use crate::parser::COMMAND_NAMES;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Completes `:command` names, and paths after `:file `.
pub struct CommandCompleter {
    files: FilenameCompleter,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self { files: FilenameCompleter::new() }
    }

    pub fn command_candidates(prefix: &str) -> Vec<Pair> {
        let Some(partial) = prefix.strip_prefix(':') else {
            return Vec::new();
        };
        COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(partial))
            .map(|name| Pair {
                display: format!(":{name}"),
                replacement: format!(":{name} "),
            })
            .collect()
    }
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let before = &line[..pos];
        if before.starts_with(":file ") {
            return self.files.complete(line, pos, ctx);
        }
        if before.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((0, Self::command_candidates(before)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}

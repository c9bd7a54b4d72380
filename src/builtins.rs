// builtins.rs

use crate::engine::EchoEngine;
use crate::parser::Command;
use crate::util::writeln_ignore_broken_pipe;
use std::io::{self, Write};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const HELP: &str = "\
<text>                          echo text
:upper <text>                   echo in upper case
:lower <text>                   echo in lower case
:reverse <text>                 echo reversed
:repeat <n> <text> [separator]  echo text n times
:preview <text>                 echo without recording
:file <path>                    echo a file's contents
:history [n]                    show the last n results
:clear                          forget all results
:quit                           leave";

pub fn run_builtin<W: Write + ?Sized>(command: Command, engine: &mut EchoEngine, out: &mut W) -> io::Result<Flow> {
    match command {
        Command::Echo(text) => {
            let result = engine.echo(text);
            writeln_ignore_broken_pipe(out, result)?;
        }
        Command::Preview(text) => {
            let result = engine.echo_with(text, false);
            writeln_ignore_broken_pipe(out, result)?;
        }
        Command::Upper(text) => {
            let result = engine.echo_upper(&text);
            writeln_ignore_broken_pipe(out, result)?;
        }
        Command::Lower(text) => {
            let result = engine.echo_lower(&text);
            writeln_ignore_broken_pipe(out, result)?;
        }
        Command::Reverse(text) => {
            let result = engine.echo_reverse(&text);
            writeln_ignore_broken_pipe(out, result)?;
        }
        Command::Repeat { text, times, separator } => match engine.echo_repeat(&text, times, &separator) {
            Ok(result) => writeln_ignore_broken_pipe(out, result)?,
            Err(e) => writeln_ignore_broken_pipe(out, format!("repeat: {e}"))?,
        },
        Command::File(path) => match engine.echo_file(&path) {
            Some(result) => writeln_ignore_broken_pipe(out, result)?,
            None => writeln_ignore_broken_pipe(out, format!("file: cannot read {}", path.display()))?,
        },
        Command::History(limit) => {
            let history = engine.history_log();
            for (i, entry) in history.tail(limit.unwrap_or(history.len())) {
                writeln_ignore_broken_pipe(out, format!("{:>5}  {}", i, entry))?;
            }
        }
        Command::Clear => engine.clear_history(),
        Command::Help => writeln_ignore_broken_pipe(out, HELP)?,
        Command::Quit => {
            debug!(entries = engine.history_len(), "leaving interactive session");
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

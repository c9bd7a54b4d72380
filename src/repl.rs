// repl.rs

use crate::builtins::{run_builtin, Flow};
use crate::completion::CommandCompleter;
use crate::engine::EchoEngine;
use crate::parser::parse_line;
use crate::util::writeln_ignore_broken_pipe;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::{debug, info};

pub const PROMPT: &str = "echo> ";

/// Reads lines until `:quit`, Ctrl-C or Ctrl-D, running each against `engine`.
pub fn start_repl(engine: &mut EchoEngine) -> anyhow::Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));
    info!(prefix = engine.prefix(), suffix = engine.suffix(), "interactive session started");

    let stdout = std::io::stdout();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                let mut out = stdout.lock();
                match parse_line(&line) {
                    Ok(Some(command)) => {
                        if run_builtin(command, engine, &mut out)? == Flow::Exit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        debug!(line = %line, "rejected input");
                        writeln_ignore_broken_pipe(&mut out, e.to_string())?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

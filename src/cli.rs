// cli.rs

use crate::engine::EchoEngine;
use crate::repl;
use crate::transform::{Transform, DEFAULT_SEPARATOR};
use crate::util::writeln_ignore_broken_pipe;
use clap::{ArgAction, ArgGroup, Parser};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub const USAGE: &str = "Usage: textecho <text>";

#[derive(Parser, Debug)]
#[command(name = "textecho", about = "Echo text with a fixed prefix and suffix", version)]
#[command(group(ArgGroup::new("transform").args(["upper", "lower", "reverse", "repeat"])))]
pub struct Cli {
    /// Words to echo, joined with single spaces. Once the text starts,
    /// every later argument is a word, dashes included.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,

    /// Prepended to every result
    #[arg(long, env = "TEXTECHO_PREFIX", default_value = "")]
    pub prefix: String,

    /// Appended to every result
    #[arg(long, env = "TEXTECHO_SUFFIX", default_value = "")]
    pub suffix: String,

    /// Upper-case the text
    #[arg(long)]
    pub upper: bool,

    /// Lower-case the text
    #[arg(long)]
    pub lower: bool,

    /// Reverse the text (by code point)
    #[arg(long)]
    pub reverse: bool,

    /// Repeat the text N times
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub repeat: Option<i64>,

    /// Separator between repetitions [default: " "]
    #[arg(long, value_name = "SEP", requires = "repeat")]
    pub separator: Option<String>,

    /// Echo the contents of a file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["text", "transform"])]
    pub file: Option<PathBuf>,

    /// Start an interactive session
    #[arg(short, long, conflicts_with_all = ["text", "transform", "file"])]
    pub interactive: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn transform(&self) -> Transform {
        if self.upper {
            Transform::Upper
        } else if self.lower {
            Transform::Lower
        } else if self.reverse {
            Transform::Reverse
        } else if let Some(times) = self.repeat {
            Transform::Repeat {
                times,
                separator: self.separator.clone().unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            }
        } else {
            Transform::Plain
        }
    }
}

/// Runs one invocation and returns the process exit code. Results go to
/// `out`, diagnostics to `err`.
pub fn run<W: Write, E: Write>(cli: Cli, out: &mut W, err: &mut E) -> anyhow::Result<i32> {
    let mut engine = EchoEngine::new(cli.prefix.as_str(), cli.suffix.as_str());

    if cli.interactive {
        repl::start_repl(&mut engine)?;
        return Ok(0);
    }

    if let Some(path) = &cli.file {
        return match engine.try_echo_file(path) {
            Ok(result) => {
                writeln_ignore_broken_pipe(out, result)?;
                Ok(0)
            }
            Err(e) => {
                debug!(path = %path.display(), "file echo failed");
                writeln!(err, "textecho: {e}")?;
                Ok(1)
            }
        };
    }

    if cli.text.is_empty() {
        writeln_ignore_broken_pipe(out, USAGE)?;
        return Ok(1);
    }

    let transform = cli.transform();
    debug!(?transform, words = cli.text.len(), "echoing arguments");
    let result = engine.apply(&transform, cli.text)?;
    writeln_ignore_broken_pipe(out, result)?;
    Ok(0)
}

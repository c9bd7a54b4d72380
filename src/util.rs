// util.rs

use std::io::{self, Write};

/// Writes `s` plus a newline. A closed reader (`textecho foo | head -0`) is
/// not an error.
pub fn writeln_ignore_broken_pipe<W: Write + ?Sized, S: AsRef<str>>(w: &mut W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

// engine.rs

use crate::error::EchoError;
use crate::history::History;
use crate::input::EchoInput;
use crate::transform::{self, Transform};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Formats text with a fixed prefix and suffix and remembers every result it
/// was asked to record.
///
/// The engine has a single owner. Mutation goes through `&mut self`, and
/// callers sharing one across threads must provide their own locking.
#[derive(Debug, Clone, Default)]
pub struct EchoEngine {
    prefix: String,
    suffix: String,
    history: History,
}

impl EchoEngine {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            history: History::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wraps `text` in prefix and suffix without touching history.
    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + text.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(text);
        out.push_str(&self.suffix);
        out
    }

    pub fn echo(&mut self, input: impl Into<EchoInput>) -> String {
        self.echo_with(input, true)
    }

    pub fn echo_with(&mut self, input: impl Into<EchoInput>, record: bool) -> String {
        let result = self.format(&input.into().render());
        if record {
            trace!(len = result.len(), "recording history entry");
            self.history.push(result.clone());
        }
        result
    }

    pub fn echo_upper(&mut self, text: &str) -> String {
        self.echo(transform::upper(text))
    }

    pub fn echo_lower(&mut self, text: &str) -> String {
        self.echo(transform::lower(text))
    }

    pub fn echo_reverse(&mut self, text: &str) -> String {
        self.echo(transform::reverse(text))
    }

    /// Nothing is recorded when `times` is negative.
    pub fn echo_repeat(&mut self, text: &str, times: i64, separator: &str) -> Result<String, EchoError> {
        let repeated = transform::repeat(text, times, separator)?;
        Ok(self.echo(repeated))
    }

    pub fn apply(&mut self, transform: &Transform, input: impl Into<EchoInput>) -> Result<String, EchoError> {
        let text = transform.apply(&input.into().render())?;
        Ok(self.echo(text))
    }

    pub fn history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_log(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }

    /// Echoes a whole file, or `None` if it cannot be read as UTF-8 text.
    pub fn echo_file(&mut self, path: impl AsRef<Path>) -> Option<String> {
        match self.try_echo_file(path) {
            Ok(result) => Some(result),
            Err(e) => {
                debug!(error = %e, "file not echoed");
                None
            }
        }
    }

    pub fn try_echo_file(&mut self, path: impl AsRef<Path>) -> Result<String, EchoError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EchoError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.echo(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn framed() -> EchoEngine {
        EchoEngine::new("[", "]")
    }

    #[test]
    fn plain_echo() {
        let mut e = EchoEngine::default();
        assert_eq!(e.echo("Hello World"), "Hello World");
        assert_eq!(e.echo(""), "");
    }

    #[test]
    fn prefix_and_suffix() {
        let mut e = EchoEngine::new("[PREFIX] ", " [SUFFIX]");
        assert_eq!(e.echo("Test"), "[PREFIX] Test [SUFFIX]");
        assert_eq!(e.prefix(), "[PREFIX] ");
        assert_eq!(e.suffix(), " [SUFFIX]");
    }

    #[test]
    fn word_sequences() {
        let mut e = EchoEngine::default();
        assert_eq!(e.echo(vec!["Hello", "World", "Test"]), "Hello World Test");
        assert_eq!(e.echo(vec![Some("Hello"), None, Some("World")]), "Hello None World");
    }

    #[test]
    fn text_is_passed_through_untouched() {
        let mut e = EchoEngine::default();
        let special = "!@#$%^&*()_+-=[]{}|;':\",./<>?";
        assert_eq!(e.echo(special), special);
        assert_eq!(e.echo("Hello 世界 🌍"), "Hello 世界 🌍");
        assert_eq!(e.echo("Line1\nLine2\nLine3"), "Line1\nLine2\nLine3");
        let long = "a".repeat(10_000);
        assert_eq!(e.echo(long.as_str()).len(), 10_000);
    }

    #[test]
    fn transforms_are_framed() {
        let mut e = framed();
        assert_eq!(e.echo_upper("Test"), "[TEST]");
        assert_eq!(e.echo_lower("Test"), "[test]");
        assert_eq!(e.echo_reverse("Test"), "[tseT]");
    }

    #[test]
    fn repeat() {
        let mut e = EchoEngine::default();
        assert_eq!(e.echo_repeat("Test", 3, " ").unwrap(), "Test Test Test");
        assert_eq!(e.echo_repeat("Test", 3, "-").unwrap(), "Test-Test-Test");
        assert_eq!(e.echo_repeat("Test", 0, " ").unwrap(), "");
        assert_eq!(framed().echo_repeat("anything", 0, "~").unwrap(), "[]");
    }

    #[test]
    fn negative_repeat_records_nothing() {
        let mut e = EchoEngine::default();
        assert!(e.echo_repeat("Test", -1, " ").unwrap_err().is_invalid_argument());
        assert_eq!(e.history_len(), 0);
    }

    #[test]
    fn unrecorded_echo_leaves_history_alone() {
        let mut e = EchoEngine::default();
        e.echo_with("First", true);
        e.echo_with("Not stored", false);
        e.echo_with("Second", true);
        assert_eq!(e.history(), vec!["First", "Second"]);
        assert_eq!(e.format("x"), "x");
        assert_eq!(e.history_len(), 2);
    }

    #[test]
    fn history_covers_every_operation() {
        let mut e = framed();
        e.echo("Normal");
        e.echo_upper("upper");
        e.echo_lower("LOWER");
        e.echo_reverse("reverse");
        e.apply(&Transform::Repeat { times: 2, separator: "+".into() }, "ab").unwrap();
        assert_eq!(
            e.history(),
            vec!["[Normal]", "[UPPER]", "[lower]", "[esrever]", "[ab+ab]"]
        );
    }

    #[test]
    fn history_reads_are_copies() {
        let mut e = EchoEngine::default();
        e.echo("Test");
        let mut first = e.history();
        let second = e.history();
        assert_eq!(first, second);
        first.push("Modified".into());
        assert_eq!(e.history(), vec!["Test"]);
    }

    #[test]
    fn clear_resets_history() {
        let mut e = EchoEngine::default();
        e.echo("Test1");
        e.echo("Test2");
        e.clear_history();
        assert!(e.history().is_empty());
        e.echo("Test3");
        assert_eq!(e.history(), vec!["Test3"]);
    }

    #[test]
    fn file_contents_are_echoed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Content").unwrap();
        let mut e = EchoEngine::new(">>> ", " <<<");
        assert_eq!(e.echo_file(file.path()).as_deref(), Some(">>> Content <<<"));
        assert_eq!(e.history(), vec![">>> Content <<<"]);
    }

    #[test]
    fn mixed_workflow_on_one_engine() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "File content").unwrap();
        let mut e = EchoEngine::new(">> ", " <<");
        e.echo("First message");
        assert_eq!(e.echo_repeat("Important", 2, " - ").unwrap(), ">> Important - Important <<");
        assert!(e.echo_file(file.path()).is_some());
        assert_eq!(
            e.history(),
            vec![">> First message <<", ">> Important - Important <<", ">> File content <<"]
        );
    }

    #[test]
    fn large_history() {
        let mut e = EchoEngine::default();
        for i in 0..10_000 {
            e.echo(format!("Message {i}"));
        }
        let history = e.history();
        assert_eq!(history.len(), 10_000);
        assert_eq!(history[0], "Message 0");
        assert_eq!(history[9_999], "Message 9999");
    }

    #[test]
    fn missing_file_is_absent() {
        let mut e = EchoEngine::default();
        assert_eq!(e.echo_file("/nonexistent/path"), None);
        assert_eq!(e.history_len(), 0);
        match e.try_echo_file("/nonexistent/path") {
            Err(EchoError::ResourceUnavailable { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/path"))
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn directories_and_binary_files_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut e = EchoEngine::default();
        assert_eq!(e.echo_file(dir.path()), None);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(e.echo_file(file.path()), None);
        assert_eq!(e.history_len(), 0);
    }
}

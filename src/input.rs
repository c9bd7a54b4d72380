// input.rs

use itertools::Itertools;

/// Rendering of an absent element inside a word sequence.
pub const ABSENT_WORD: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoInput {
    Text(String),
    Words(Vec<Option<String>>),
}

impl EchoInput {
    /// Words are joined with a single space; absent words render as [`ABSENT_WORD`].
    pub fn render(&self) -> String {
        match self {
            EchoInput::Text(text) => text.clone(),
            EchoInput::Words(words) => words
                .iter()
                .map(|w| w.as_deref().unwrap_or(ABSENT_WORD))
                .join(" "),
        }
    }
}

impl From<&str> for EchoInput {
    fn from(s: &str) -> Self {
        EchoInput::Text(s.to_string())
    }
}

impl From<String> for EchoInput {
    fn from(s: String) -> Self {
        EchoInput::Text(s)
    }
}

impl From<&String> for EchoInput {
    fn from(s: &String) -> Self {
        EchoInput::Text(s.clone())
    }
}

impl From<&[&str]> for EchoInput {
    fn from(words: &[&str]) -> Self {
        EchoInput::Words(words.iter().map(|w| Some(w.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EchoInput {
    fn from(words: [&str; N]) -> Self {
        EchoInput::from(&words[..])
    }
}

impl From<Vec<&str>> for EchoInput {
    fn from(words: Vec<&str>) -> Self {
        EchoInput::from(words.as_slice())
    }
}

impl From<Vec<String>> for EchoInput {
    fn from(words: Vec<String>) -> Self {
        EchoInput::Words(words.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<&str>>> for EchoInput {
    fn from(words: Vec<Option<&str>>) -> Self {
        EchoInput::Words(words.into_iter().map(|w| w.map(str::to_string)).collect())
    }
}

impl From<Vec<Option<String>>> for EchoInput {
    fn from(words: Vec<Option<String>>) -> Self {
        EchoInput::Words(words)
    }
}

// transform.rs

use crate::error::EchoError;
use itertools::Itertools;
use std::iter;

pub const DEFAULT_TIMES: i64 = 1;
pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    Plain,
    Upper,
    Lower,
    Reverse,
    Repeat { times: i64, separator: String },
}

impl Transform {
    pub fn apply(&self, text: &str) -> Result<String, EchoError> {
        match self {
            Transform::Plain => Ok(text.to_string()),
            Transform::Upper => Ok(upper(text)),
            Transform::Lower => Ok(lower(text)),
            Transform::Reverse => Ok(reverse(text)),
            Transform::Repeat { times, separator } => repeat(text, *times, separator),
        }
    }
}

pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Reverses code points. Grapheme clusters built from several code points
/// (combining marks, ZWJ emoji) come out split.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn repeat(text: &str, times: i64, separator: &str) -> Result<String, EchoError> {
    if times < 0 {
        return Err(EchoError::InvalidArgument(format!(
            "repetition count must be non-negative, got {times}"
        )));
    }
    let too_large = || EchoError::InvalidArgument(format!("repetition count {times} is too large"));
    let times = usize::try_from(times).map_err(|_| too_large())?;
    if times == 0 {
        return Ok(String::new());
    }
    let len = text
        .len()
        .checked_mul(times)
        .zip(separator.len().checked_mul(times - 1))
        .and_then(|(body, seps)| body.checked_add(seps))
        .ok_or_else(too_large)?;
    if len == 0 {
        return Ok(String::new());
    }
    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| too_large())?;
    out.push_str(&iter::repeat(text).take(times).join(separator));
    Ok(out)
}

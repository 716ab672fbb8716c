//! Character sequence container used for every symbol field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An owned sequence of `char`s.
///
/// Symbol specifications store their leading and trailing characters in
/// this type. Length is measured in characters, not bytes, so `"€"` has a
/// length of one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RuneArray {
    chars: Vec<char>,
}

impl RuneArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_chars(chars: &[char]) -> Self {
        Self {
            chars: chars.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Replace the contents with `chars`.
    pub fn set_chars(&mut self, chars: &[char]) {
        self.chars.clear();
        self.chars.extend_from_slice(chars);
    }

    pub fn char_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }

    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl fmt::Display for RuneArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<&str> for RuneArray {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl From<String> for RuneArray {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[char]> for RuneArray {
    fn from(chars: &[char]) -> Self {
        Self::from_chars(chars)
    }
}

impl From<Vec<char>> for RuneArray {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl From<RuneArray> for String {
    fn from(runes: RuneArray) -> Self {
        runes.char_string()
    }
}

//! Filler text fields: a short character sequence repeated N times.
//!
//! ```rust
//! use numstr::text::TextFieldSpecFiller;
//!
//! let filler = TextFieldSpecFiller::new("-*", 3).unwrap();
//! assert_eq!(filler.formatted_text(), "-*-*-*");
//! assert_eq!(filler.text_width(), 6);
//! ```

use crate::core::{Error, Result, RuneArray};
use serde::Serialize;
use std::fmt;

/// Largest accepted repeat count.
pub const MAX_REPEAT_COUNT: usize = 1_000_000;

/// Pure function to validate filler characters
pub fn validate_filler_chars(chars: &[char]) -> Result<()> {
    if chars.is_empty() {
        return Err(Error::InvalidFillerChars(
            "filler characters have a zero length".to_string(),
        ));
    }

    if let Some(index) = chars.iter().position(|&c| c == '\0') {
        return Err(Error::InvalidFillerChars(format!(
            "filler character at index {index} is a NUL character"
        )));
    }

    Ok(())
}

/// Pure function to validate a filler repeat count
pub fn validate_repeat_count(count: usize) -> Result<()> {
    if !(1..=MAX_REPEAT_COUNT).contains(&count) {
        return Err(Error::InvalidRepeatCount {
            count,
            max: MAX_REPEAT_COUNT,
        });
    }
    Ok(())
}

/// A filler field such as `"-----"` or `"*-*-*-"`.
///
/// The default value is empty and therefore invalid; it renders as an empty
/// string until configured through a setter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextFieldSpecFiller {
    chars: RuneArray,
    repeat_count: usize,
}

impl TextFieldSpecFiller {
    pub fn new(chars: &str, repeat_count: usize) -> Result<Self> {
        let runes: Vec<char> = chars.chars().collect();
        Self::new_rune_array(&runes, repeat_count)
    }

    pub fn new_rune(c: char, repeat_count: usize) -> Result<Self> {
        Self::new_rune_array(&[c], repeat_count)
    }

    pub fn new_rune_array(chars: &[char], repeat_count: usize) -> Result<Self> {
        let mut filler = Self::default();
        filler.set_text_filler_rune_array(chars, repeat_count)?;
        Ok(filler)
    }

    pub fn set_text_filler(&mut self, chars: &str, repeat_count: usize) -> Result<()> {
        let runes: Vec<char> = chars.chars().collect();
        self.set_text_filler_rune_array(&runes, repeat_count)
    }

    pub fn set_text_filler_rune(&mut self, c: char, repeat_count: usize) -> Result<()> {
        self.set_text_filler_rune_array(&[c], repeat_count)
    }

    /// Validate and store new filler settings; `self` is untouched on error.
    pub fn set_text_filler_rune_array(
        &mut self,
        chars: &[char],
        repeat_count: usize,
    ) -> Result<()> {
        validate_filler_chars(chars)?;
        validate_repeat_count(repeat_count)?;

        self.chars.set_chars(chars);
        self.repeat_count = repeat_count;
        Ok(())
    }

    /// Copy a valid filler into `self`.
    pub fn copy_in(&mut self, other: &TextFieldSpecFiller) -> Result<()> {
        other
            .is_valid_instance_error()
            .map_err(|e| Error::InvalidFiller(format!("source filler is invalid: {e}")))?;
        self.clone_from(other);
        Ok(())
    }

    /// Return a deep copy, refusing to copy an invalid filler.
    pub fn copy_out(&self) -> Result<TextFieldSpecFiller> {
        self.is_valid_instance_error()
            .map_err(|e| Error::InvalidFiller(format!("filler is invalid: {e}")))?;
        Ok(self.clone())
    }

    pub fn empty(&mut self) {
        self.chars.clear();
        self.repeat_count = 0;
    }

    pub fn is_valid_instance(&self) -> bool {
        self.is_valid_instance_error().is_ok()
    }

    pub fn is_valid_instance_error(&self) -> Result<()> {
        validate_filler_chars(self.chars.as_chars())?;
        validate_repeat_count(self.repeat_count)
    }

    /// The filler characters repeated `repeat_count` times.
    pub fn formatted_text(&self) -> String {
        if !self.is_valid_instance() {
            return String::new();
        }
        self.chars.char_string().repeat(self.repeat_count)
    }

    pub fn filler_chars(&self) -> String {
        self.chars.char_string()
    }

    pub fn filler_runes(&self) -> &RuneArray {
        &self.chars
    }

    pub fn filler_chars_repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Width in characters of the formatted text.
    pub fn text_width(&self) -> usize {
        if !self.is_valid_instance() {
            return 0;
        }
        self.chars.len() * self.repeat_count
    }
}

impl fmt::Display for TextFieldSpecFiller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_text())
    }
}

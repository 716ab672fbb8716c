//! Text field helpers: filler fields and justification.

pub mod filler;
pub mod justify;

pub use filler::{TextFieldSpecFiller, MAX_REPEAT_COUNT};
pub use justify::justify_text;

//! CLI command implementations.
//!
//! Available commands:
//! - **format**: Format a number string with sign, currency and field settings
//! - **filler**: Print a filler field
//! - **presets**: List symbol presets with a sample value
//! - **show-config**: Print the resolved configuration
//! - **init**: Write a default `.numstr.toml`

pub mod filler;
pub mod format;
pub mod init;
pub mod presets;
pub mod show_config;

pub use filler::handle_filler;
pub use format::{handle_format, FormatOptions};
pub use init::init_config;
pub use presets::handle_presets;
pub use show_config::handle_show_config;

//! Sign and currency symbol specifications.
//!
//! - [`spec`]: one leading/trailing symbol pair with field positions
//! - [`signs`]: plain positive and negative sign specs
//! - [`symbols_spec`]: positive, negative and zero specs together
//! - [`group`]: sign specs plus a separate currency spec
//! - [`presets`]: named country configurations

pub mod group;
pub mod presets;
pub mod signs;
pub mod spec;
pub mod symbols_spec;

pub use group::NumberSymbolGroup;
pub use presets::SymbolPreset;
pub use signs::{NegativeNumberSignSpec, PositiveNumberSignSpec};
pub use spec::NumberSymbolSpec;
pub use symbols_spec::{NumberSymbolsSpec, SymbolTriple};

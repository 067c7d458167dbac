//! Life configuration structure, plus serialization and deserialization from the RON config
//! format.
#[allow(clippy::module_inception)]
mod config;
mod defaults;

pub use config::*;
pub use defaults::*;

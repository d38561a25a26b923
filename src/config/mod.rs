pub mod manifest;
pub mod settings;

pub use manifest::*;
pub use settings::*;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "dossier.yml";

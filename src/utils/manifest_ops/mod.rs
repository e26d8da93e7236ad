// cargo manifest version lookup

pub mod reader;
pub mod types;

pub use reader::{ManifestReader, crate_version};
pub use types::ManifestDocument;

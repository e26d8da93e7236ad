pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    SectionSpan, UNRELEASED_HEADING, UpdateStatus, find_unreleased, promote_unreleased,
    scan_sections, update_changelog_file,
};
pub use utils::manifest_ops::{ManifestDocument, ManifestReader, crate_version};
pub use utils::release::{ReleaseOutcome, roll_crate_changelog};

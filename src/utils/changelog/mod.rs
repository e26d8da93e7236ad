// changelog section handling

pub mod parser;
pub mod types;
pub mod updater;

pub use parser::{find_unreleased, scan_sections};
pub use types::{SectionSpan, UNRELEASED_HEADING, UpdateStatus};
pub use updater::{promote_unreleased, update_changelog_file};

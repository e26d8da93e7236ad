// release step: manifest version -> changelog rotation

use crate::error::Result;
use crate::utils::changelog::update_changelog_file;
use crate::utils::manifest_ops::crate_version;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// result of rolling a crate's changelog for its manifest version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseOutcome {
    pub version: String,
    /// false when the version already had a changelog section
    pub released: bool,
}

/// read `<crate_dir>/Cargo.toml` and file the unreleased changelog section in
/// `<crate_dir>/CHANGELOG.md` under the manifest's version
///
/// the two relative locations are a fixed contract with the CI pipeline.
pub fn roll_crate_changelog<P: AsRef<Path>>(crate_dir: P) -> Result<ReleaseOutcome> {
    let crate_dir = crate_dir.as_ref();

    let version = crate_version(crate_dir.join("Cargo.toml"))?;
    let status = update_changelog_file(crate_dir.join("CHANGELOG.md"), &version)?;

    Ok(ReleaseOutcome {
        released: status.is_updated(),
        version,
    })
}

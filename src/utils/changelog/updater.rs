// changelog updater

use super::parser::{find_unreleased, scan_sections};
use super::types::{SectionSpan, UNRELEASED_HEADING, UpdateStatus};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// move the "Unreleased" section's content under a new `# v<version>` heading
///
/// the unreleased heading is normalized to `# Unreleased Changes` and left
/// empty; the new version section is inserted directly after it. everything
/// outside the rewritten span is carried over verbatim. returns
/// `UpdateStatus::VersionExists` without touching the text when the version
/// heading already occurs in the document.
pub fn promote_unreleased(text: &str, version: &str) -> Result<UpdateStatus> {
    let sections = scan_sections(text);
    let unreleased = find_unreleased(&sections).ok_or_else(|| Error::SectionNotFound {
        section: "Unreleased".to_string(),
    })?;

    let version_heading = format!("# v{}", version);

    // plain substring check, deliberately not a structural section lookup
    if text.contains(&version_heading) {
        return Ok(UpdateStatus::VersionExists);
    }

    Ok(UpdateStatus::Updated {
        text: splice(text, unreleased, &version_heading),
    })
}

fn splice(text: &str, unreleased: &SectionSpan, version_heading: &str) -> String {
    let body = unreleased.body(text);

    let mut updated = String::with_capacity(text.len() + UNRELEASED_HEADING.len() + 16);
    updated.push_str(&text[..unreleased.heading_start]);
    updated.push_str(UNRELEASED_HEADING);
    updated.push_str("\n\n\n");
    updated.push_str(version_heading);
    updated.push_str("\n\n");
    updated.push_str(body);
    updated.push('\n');

    if unreleased.end < text.len() {
        updated.push('\n');
        updated.push_str(&text[unreleased.end..]);
    }

    updated
}

/// run `promote_unreleased` against a changelog file, rewriting the whole file
/// on success and leaving it untouched otherwise
pub fn update_changelog_file<P: AsRef<Path>>(path: P, version: &str) -> Result<UpdateStatus> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let status = promote_unreleased(&content, version)?;

    if let UpdateStatus::Updated { text } = &status {
        fs::write(path, text).map_err(|e| Error::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn promoted(text: &str, version: &str) -> String {
        match promote_unreleased(text, version).unwrap() {
            UpdateStatus::Updated { text } => text,
            UpdateStatus::VersionExists => panic!("unexpected VersionExists"),
        }
    }

    #[test]
    fn test_promote_round_trip() {
        let text = "# Unreleased\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";
        let expected =
            "# Unreleased Changes\n\n\n# v1.1.0\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";

        assert_eq!(promoted(text, "1.1.0"), expected);
    }

    #[test]
    fn test_promote_is_idempotent() {
        let text = "# Unreleased\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";

        let first = promoted(text, "1.1.0");
        let second = promote_unreleased(&first, "1.1.0").unwrap();

        assert_eq!(second, UpdateStatus::VersionExists);
    }

    #[test]
    fn test_promote_uppercase_heading() {
        let text = "# UNRELEASED\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";
        let expected =
            "# Unreleased Changes\n\n\n# v1.1.0\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";

        assert_eq!(promoted(text, "1.1.0"), expected);
    }

    #[test]
    fn test_promote_unreleased_as_last_section() {
        let text = "# v1.0.0\n\nInitial release.\n\n# Unreleased\n\nFix bug A.\n";
        let expected =
            "# v1.0.0\n\nInitial release.\n\n# Unreleased Changes\n\n\n# v1.1.0\n\nFix bug A.\n";

        assert_eq!(promoted(text, "1.1.0"), expected);
    }

    #[test]
    fn test_promote_keeps_nested_headings_in_body() {
        let text = "# Unreleased\n\n## Fixed\n\n* bug A\n\n# v1.0.0\n\nInitial release.\n";
        let expected = "# Unreleased Changes\n\n\n# v1.1.0\n\n## Fixed\n\n* bug A\n\n# v1.0.0\n\nInitial release.\n";

        assert_eq!(promoted(text, "1.1.0"), expected);
    }

    #[test]
    fn test_promote_preserves_preamble() {
        let text = "Release notes.\n\n# Unreleased\n\nFix bug A.\n";
        let expected = "Release notes.\n\n# Unreleased Changes\n\n\n# v0.2.0\n\nFix bug A.\n";

        assert_eq!(promoted(text, "0.2.0"), expected);
    }

    #[test]
    fn test_existing_version_is_a_conflict() {
        let text = "# Unreleased\n\nFix bug A.\n\n# v2.0.0\n\nBig release.\n";

        let status = promote_unreleased(text, "2.0.0").unwrap();
        assert_eq!(status, UpdateStatus::VersionExists);
    }

    #[test]
    fn test_conflict_check_is_substring_based() {
        // "# v1.0" is a substring of the existing "# v1.0.0" heading, so the
        // shorter version is reported as already released
        let text = "# Unreleased\n\nFix bug A.\n\n# v1.0.0\n\nInitial release.\n";

        let status = promote_unreleased(text, "1.0").unwrap();
        assert_eq!(status, UpdateStatus::VersionExists);
    }

    #[test]
    fn test_missing_unreleased_section() {
        let text = "# v1.0.0\n\nInitial release.\n";

        match promote_unreleased(text, "1.1.0") {
            Err(Error::SectionNotFound { section }) => assert_eq!(section, "Unreleased"),
            other => panic!("expected SectionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_file_writes_result() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        fs::write(&path, "# Unreleased\n\nFix bug A.\n").unwrap();

        let status = update_changelog_file(&path, "1.1.0").unwrap();
        assert!(status.is_updated());

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# Unreleased Changes\n\n\n# v1.1.0\n\nFix bug A.\n");
    }

    #[test]
    fn test_update_file_untouched_on_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        let original = "# Unreleased\n\nFix bug A.\n\n# v1.1.0\n\nOld notes.\n";
        fs::write(&path, original).unwrap();

        let status = update_changelog_file(&path, "1.1.0").unwrap();
        assert_eq!(status, UpdateStatus::VersionExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_update_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");

        match update_changelog_file(&path, "1.0.0") {
            Err(Error::FileReadError { .. }) => {}
            other => panic!("expected FileReadError, got {:?}", other),
        }
    }
}

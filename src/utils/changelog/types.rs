// changelog data structures

use serde::{Deserialize, Serialize};

/// canonical heading written in place of whatever "unreleased" heading was found
pub const UNRELEASED_HEADING: &str = "# Unreleased Changes";

/// a top-level section of a changelog document, held as byte offsets into the
/// original text so untouched regions can be carried over verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpan {
    /// full heading line without its line terminator
    pub heading: String,
    /// offset of the heading line's first byte
    pub heading_start: usize,
    /// offset just past the heading text, before the line terminator
    pub heading_end: usize,
    /// offset of the next top-level heading, or the document length
    pub end: usize,
}

impl SectionSpan {
    /// the section body with surrounding whitespace trimmed
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        text[self.heading_end..self.end].trim()
    }

    /// true if the heading names the pending "unreleased" section
    pub fn is_unreleased(&self) -> bool {
        self.heading
            .strip_prefix("# ")
            .map(|rest| rest.to_ascii_lowercase().starts_with("unreleased"))
            .unwrap_or(false)
    }
}

/// outcome of promoting the unreleased section to a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateStatus {
    /// the document was rewritten; holds the full updated text
    Updated { text: String },
    /// the version heading already occurs in the document, nothing was changed
    VersionExists,
}

impl UpdateStatus {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateStatus::Updated { .. })
    }
}

// changelog section scanner

use super::types::SectionSpan;

/// scan a changelog document into its top-level sections
///
/// a section starts at a line beginning with `# ` (single hash, space) and runs
/// to the next such line or the end of the document; nested headings like `##`
/// belong to the surrounding section's body. text before the first heading is
/// not part of any section.
pub fn scan_sections(text: &str) -> Vec<SectionSpan> {
    let mut sections: Vec<SectionSpan> = Vec::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let heading_text = line.strip_suffix('\n').unwrap_or(line);

        if heading_text.starts_with("# ") {
            if let Some(prev) = sections.last_mut() {
                prev.end = line_start;
            }
            sections.push(SectionSpan {
                heading: heading_text.to_string(),
                heading_start: line_start,
                heading_end: line_start + heading_text.len(),
                end: text.len(),
            });
        }
    }

    sections
}

/// find the first "unreleased" section, scanning from the start of the document
pub fn find_unreleased(sections: &[SectionSpan]) -> Option<&SectionSpan> {
    sections.iter().find(|s| s.is_unreleased())
}

//! Attribution of generated text lines to template sections

use std::collections::HashMap;

/// Mapping from heading title to the raw lines attributed to it.
pub type SectionMap = HashMap<String, Vec<String>>;

/// Partition generated text into per-section line lists.
///
/// Lines are walked in order. A line whose trimmed form exactly equals a
/// heading title makes that title the current section and resets its
/// content list; any other line is appended untrimmed to the current
/// section, or silently dropped when no heading has matched yet.
///
/// Matching is exact by policy: a heading the model emits with different
/// casing, punctuation, or whitespace will not match, and its content is
/// absorbed into the previously matched section. The generation
/// instructions ask the model to echo headings verbatim, but nothing
/// enforces it.
pub fn assemble_sections(generated: &str, headings: &[String]) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<String> = None;

    for line in generated.split('\n') {
        let trimmed = line.trim();
        if let Some(title) = headings.iter().find(|h| h.as_str() == trimmed) {
            sections.insert(title.clone(), Vec::new());
            current = Some(title.clone());
        } else if let Some(title) = &current {
            sections
                .entry(title.clone())
                .or_default()
                .push(line.to_string());
        }
    }

    tracing::debug!(
        matched = sections.len(),
        headings = headings.len(),
        "assembled sections from generated text"
    );
    sections
}

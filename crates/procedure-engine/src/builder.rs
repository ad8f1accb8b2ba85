//! Template-driven document assembly

use crate::sections::SectionMap;
use crate::template::{Template, TemplateParagraph};

/// One paragraph of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocParagraph {
    /// Section heading copied from the template, same text and level.
    Heading { text: String, level: usize },
    /// Bulleted item; the `"- "` prefix has been stripped.
    Bulleted(String),
    /// Numbered item; the full trimmed line is retained, prefix included.
    Numbered(String),
    /// Plain body text.
    Plain(String),
}

/// A generated document, ready for serialization. Constructed once per
/// request and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcedureDocument {
    pub paragraphs: Vec<DocParagraph>,
}

/// Build a document by walking the template's paragraphs in order.
///
/// Headings are emitted with their template text and level, followed by
/// that section's content classified line by line. A heading with no
/// matching section gets no content paragraphs. Non-heading template
/// paragraphs are copied verbatim and untrimmed, so static template
/// boilerplate appears in every generated document.
///
/// No check is made that every section map key was consumed or that
/// required sections are non-empty; malformed generated text yields
/// missing or empty sections without error.
pub fn build_document(template: &Template, sections: &SectionMap) -> ProcedureDocument {
    let mut paragraphs = Vec::new();

    for para in template.paragraphs() {
        match para {
            TemplateParagraph::Heading { level, text } => {
                paragraphs.push(DocParagraph::Heading {
                    text: text.clone(),
                    level: *level,
                });
                if let Some(lines) = sections.get(text) {
                    for line in lines {
                        paragraphs.push(classify_line(line));
                    }
                }
            }
            TemplateParagraph::Body { text } => {
                paragraphs.push(DocParagraph::Plain(text.clone()));
            }
        }
    }

    ProcedureDocument { paragraphs }
}

/// Classify one content line by its lexical prefix.
///
/// Only the literal prefixes "1." and "2." mark a numbered item; later
/// ordinals fall through to plain text.
fn classify_line(line: &str) -> DocParagraph {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("- ") {
        DocParagraph::Bulleted(rest.to_string())
    } else if trimmed.starts_with("1.") || trimmed.starts_with("2.") {
        DocParagraph::Numbered(trimmed.to_string())
    } else {
        DocParagraph::Plain(trimmed.to_string())
    }
}

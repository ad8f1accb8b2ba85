//! Template reading and heading extraction
//!
//! A template is the ordered paragraph sequence of a `.docx` file.
//! Heading-styled paragraphs carry a numeric level parsed from the style
//! id ("Heading1", "Heading 2", ...); every other paragraph is body text
//! that is copied verbatim into generated documents.

use std::path::Path;

use docx_rs::{read_docx, DocumentChild};

use crate::error::EngineError;

/// A single template paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateParagraph {
    /// A heading-styled paragraph; `level` comes from the style id.
    Heading { level: usize, text: String },
    /// A non-heading paragraph, copied verbatim into every output.
    Body { text: String },
}

impl TemplateParagraph {
    /// The paragraph's text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            TemplateParagraph::Heading { text, .. } => text,
            TemplateParagraph::Body { text } => text,
        }
    }
}

/// An ordered sequence of template paragraphs.
#[derive(Debug, Clone)]
pub struct Template {
    paragraphs: Vec<TemplateParagraph>,
}

impl Template {
    /// Parse a template from the bytes of a `.docx` file.
    ///
    /// Fails if the archive cannot be parsed or if a heading style does
    /// not encode a numeric level.
    pub fn from_docx_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let docx = read_docx(bytes).map_err(|e| EngineError::TemplateRead(e.to_string()))?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                let text = para.raw_text();
                let style = para.property.style.as_ref().map(|s| s.val.as_str());
                let paragraph = match style {
                    Some(style) if style.starts_with("Heading") => {
                        let level = parse_heading_level(style)?;
                        TemplateParagraph::Heading { level, text }
                    }
                    _ => TemplateParagraph::Body { text },
                };
                paragraphs.push(paragraph);
            }
        }

        tracing::debug!(paragraphs = paragraphs.len(), "parsed template");
        Ok(Self { paragraphs })
    }

    /// Read and parse a template from disk.
    pub fn from_docx_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let bytes = std::fs::read(path)?;
        Self::from_docx_bytes(&bytes)
    }

    /// All paragraphs in template order.
    pub fn paragraphs(&self) -> &[TemplateParagraph] {
        &self.paragraphs
    }

    /// All paragraph texts joined with newlines, for the system prompt.
    pub fn full_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(TemplateParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Ordered heading titles, for section matching.
    pub fn headings(&self) -> Vec<String> {
        self.paragraphs
            .iter()
            .filter_map(|p| match p {
                TemplateParagraph::Heading { text, .. } => Some(text.clone()),
                TemplateParagraph::Body { .. } => None,
            })
            .collect()
    }
}

/// Parse the numeric level out of a heading style id. Accepts both
/// "Heading1" and "Heading 1" forms; anything non-numeric after the
/// prefix rejects the template.
fn parse_heading_level(style: &str) -> Result<usize, EngineError> {
    style
        .strip_prefix("Heading")
        .map(str::trim)
        .and_then(|rest| rest.parse::<usize>().ok())
        .ok_or_else(|| EngineError::InvalidHeadingStyle(style.to_string()))
}

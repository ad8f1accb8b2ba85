//! `.docx` serialization of generated documents

use std::collections::BTreeSet;
use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use crate::builder::{DocParagraph, ProcedureDocument};
use crate::error::EngineError;

const BULLET_NUMBERING: usize = 1;
const DECIMAL_NUMBERING: usize = 2;

/// Serialize a document to `.docx` bytes.
///
/// Defines one heading style per distinct level present in the document,
/// plus bullet and decimal numbering definitions for list content.
pub fn render_docx(document: &ProcedureDocument) -> Result<Vec<u8>, EngineError> {
    let mut docx = Docx::new()
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
        .add_abstract_numbering(AbstractNumbering::new(DECIMAL_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("decimal"),
            LevelText::new("%1."),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING));

    for level in heading_levels(document) {
        docx = docx.add_style(heading_style(level));
    }

    for para in &document.paragraphs {
        docx = docx.add_paragraph(match para {
            DocParagraph::Heading { text, level } => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()))
                .style(&format!("Heading{level}")),
            DocParagraph::Bulleted(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()))
                .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
            DocParagraph::Numbered(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()))
                .numbering(NumberingId::new(DECIMAL_NUMBERING), IndentLevel::new(0)),
            DocParagraph::Plain(text) => {
                Paragraph::new().add_run(Run::new().add_text(text.as_str()))
            }
        });
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| EngineError::Serialize(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn heading_levels(document: &ProcedureDocument) -> BTreeSet<usize> {
    document
        .paragraphs
        .iter()
        .filter_map(|p| match p {
            DocParagraph::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect()
}

/// Word-style heading definition: bold, sized down as the level deepens.
fn heading_style(level: usize) -> Style {
    let size = match level {
        1 => 32,
        2 => 28,
        3 => 26,
        _ => 24,
    };
    Style::new(format!("Heading{level}"), StyleType::Paragraph)
        .name(format!("Heading {level}"))
        .size(size)
        .bold()
}

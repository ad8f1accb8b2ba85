//! Compliance procedure document engine
//!
//! This crate turns free-form generated prose back into a structured
//! document that follows a fixed `.docx` template:
//! - Template reading (heading extraction + full text)
//! - Section assembly (attributing generated lines to template headings)
//! - Document building and `.docx` serialization
//!
//! The pipeline is synchronous and stateless between invocations; every
//! call builds its own section map and document, so concurrent requests
//! need no coordination.

pub mod builder;
pub mod error;
pub mod render;
pub mod sections;
pub mod template;

pub use builder::{build_document, DocParagraph, ProcedureDocument};
pub use error::EngineError;
pub use render::render_docx;
pub use sections::{assemble_sections, SectionMap};
pub use template::{Template, TemplateParagraph};

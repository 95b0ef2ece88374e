//! md2lo: Markdown to HTML, DOCX and ODT through pandoc
//!
//! Builds the pandoc invocation for a requested output format, runs it,
//! and optionally opens the result in LibreOffice.

pub mod cli;
pub mod command;
pub mod converter;
pub mod deps;
pub mod error;
pub mod format;
pub mod launcher;
pub mod request;
pub mod styling;
pub mod template;

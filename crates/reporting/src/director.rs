//! Fixed assembly sequence shared by every format.

use std::io::{self, Write};

use crate::builder::ReportBuilder;
use crate::document::Document;

/// Run header → content → footer → build on `builder`.
pub fn assemble(builder: ReportBuilder, header: &str, content: &str, footer: &str) -> Document {
    builder
        .set_header(header)
        .set_content(content)
        .set_footer(footer)
        .build()
}

/// Write `document` framed by a `=== title ===` banner and a closing rule.
pub fn print_report<W: Write>(out: &mut W, document: &Document, title: &str) -> io::Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    out.write_all(document.render().as_bytes())?;
    writeln!(out, "================\n")
}

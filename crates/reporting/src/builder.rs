//! Step-by-step report construction.

use crate::document::Document;
use crate::format::{ReportFormat, Section};

/// Builds a [`Document`] in a given [`ReportFormat`].
///
/// Setters consume and return the builder so calls chain:
///
/// ```
/// use patternforge_reporting::{ReportBuilder, ReportFormat};
///
/// let doc = ReportBuilder::new(ReportFormat::Html)
///     .set_header("Monthly")
///     .set_footer("Admin")
///     .build();
/// assert_eq!(doc.header.as_deref(), Some("<h1>Monthly</h1>\n"));
/// assert_eq!(doc.content, None);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    format: ReportFormat,
    document: Document,
}

impl ReportBuilder {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            document: Document::default(),
        }
    }

    pub fn set_header(mut self, header: &str) -> Self {
        self.document.header = Some(self.format.wrap(Section::Header, header));
        self
    }

    pub fn set_content(mut self, content: &str) -> Self {
        self.document.content = Some(self.format.wrap(Section::Content, content));
        self
    }

    pub fn set_footer(mut self, footer: &str) -> Self {
        self.document.footer = Some(self.format.wrap(Section::Footer, footer));
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}

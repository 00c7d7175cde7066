//! Formatting strategies.

use serde::{Deserialize, Serialize};

/// Closed set of report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `=== h ===`, bare content, `--- f ---`.
    Plain,
    Html,
    Xml,
}

/// Which part of a document is being wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Content,
    Footer,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Plain, ReportFormat::Html, ReportFormat::Xml];

    /// Wrap `text` for `section`. The result always ends with one `\n`.
    pub fn wrap(self, section: Section, text: &str) -> String {
        use ReportFormat::*;
        use Section::*;

        match (self, section) {
            (Plain, Header) => format!("=== {text} ===\n"),
            (Plain, Content) => format!("{text}\n"),
            (Plain, Footer) => format!("--- {text} ---\n"),
            (Html, Header) => format!("<h1>{text}</h1>\n"),
            (Html, Content) => format!("<p>{text}</p>\n"),
            (Xml, Header) => format!("<header>{text}</header>\n"),
            (Xml, Content) => format!("<content>{text}</content>\n"),
            (Html | Xml, Footer) => format!("<footer>{text}</footer>\n"),
        }
    }

    /// Display title used when printing a report of this format.
    pub fn title(self) -> &'static str {
        match self {
            ReportFormat::Plain => "TEXT REPORT",
            ReportFormat::Html => "HTML REPORT",
            ReportFormat::Xml => "XML REPORT",
        }
    }
}

use serde::{Deserialize, Serialize};

use patternforge_core::ValueObject;

/// A finished report. Each field is already wrapped by the producing format
/// and ends with a single newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub header: Option<String>,
    pub content: Option<String>,
    pub footer: Option<String>,
}

impl ValueObject for Document {}

impl Document {
    /// Header, content and footer concatenated; missing parts are skipped.
    pub fn render(&self) -> String {
        [&self.header, &self.content, &self.footer]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

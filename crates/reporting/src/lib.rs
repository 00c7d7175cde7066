//! Report assembly: a three-part document produced by one of several
//! formatting strategies through a shared builder sequence.

pub mod builder;
pub mod director;
pub mod document;
pub mod format;

pub use builder::ReportBuilder;
pub use director::{assemble, print_report};
pub use document::Document;
pub use format::{ReportFormat, Section};

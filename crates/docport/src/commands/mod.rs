//! CLI command implementations.

mod docx;
mod serve;
mod sheets;

pub(crate) use docx::DocxArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sheets::SplitArgs;

pub mod output;
pub mod walker;

pub use output::{create_writer, ColorMode, OutputFormat, OutputWriter};
pub use walker::{find_documents, DocumentWalker};

use anyhow::Result;
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read a UTF-8 document, dropping a leading byte order mark.
pub fn read_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

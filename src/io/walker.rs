use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "txt";

/// Lists the plain-text documents directly inside a directory.
pub struct DocumentWalker {
    root: PathBuf,
    extension: String,
}

impl DocumentWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Matching files, sorted by path so runs are reproducible.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(false)
            .max_depth(Some(1))
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Extension match is case-sensitive: `notes.TXT` is not a document.
    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension)
            .unwrap_or(false)
    }
}

pub fn find_documents(root: &Path) -> Result<Vec<PathBuf>> {
    DocumentWalker::new(root.to_path_buf()).walk()
}

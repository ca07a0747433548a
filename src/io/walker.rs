use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Extensions handled by the TypeScript front-end
const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|pattern| glob::Pattern::new(pattern))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// TypeScript files under the root, sorted by path.
    ///
    /// A root that is itself a file is returned as long as it is not ignored.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(if self.is_ignored(&self.root) {
                vec![]
            } else {
                vec![self.root.clone()]
            });
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| entry.file_name() != "node_modules")
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

    fn should_process(&self, path: &Path) -> bool {
        let is_typescript = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TYPESCRIPT_EXTENSIONS.contains(&ext));

        if !is_typescript {
            return false;
        }

        if self.is_ignored(path) {
            log::debug!("Ignoring {}", path.display());
            return false;
        }

        true
    }

    /// Patterns match either the full path or the path below the root.
    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
    }
}

/// TypeScript files under each of `roots`, in root order, without duplicates
pub fn find_project_files(roots: &[PathBuf], ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        if !root.exists() {
            anyhow::bail!("Path not found: {}", root.display());
        }
        for file in FileWalker::new(root.clone())
            .with_ignore_patterns(ignore_patterns)?
            .walk()?
        {
            if !files.contains(&file) {
                files.push(file);
            }
        }
    }
    Ok(files)
}

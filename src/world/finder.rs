use std::env;
use std::path::{Path, PathBuf};

/// Ordered list of directories a data file is looked up in.
///
/// Each root is searched together with all of its ancestors, so running the
/// binary from a nested directory of the project still finds `data/...`.
#[derive(Debug, Clone)]
pub struct SearchPath {
    pub roots: Vec<PathBuf>,
}

impl Default for SearchPath {
    fn default() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        SearchPath {
            roots: vec![cwd.clone(), cwd.join("data"), cwd.join("resources")],
        }
    }
}

impl SearchPath {
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        SearchPath {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve `file_name` to an existing file, or `None` if no root has it.
    pub fn find(&self, file_name: &str) -> Option<PathBuf> {
        let direct = Path::new(file_name);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }

        for root in &self.roots {
            for dir in root.ancestors() {
                let candidate = dir.join(file_name);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "Resolved data file");
                    return Some(candidate);
                }
            }
        }

        None
    }
}

/// Look `file_name` up on the default search path.
pub fn find_file(file_name: &str) -> Option<PathBuf> {
    SearchPath::default().find(file_name)
}

use std::path::PathBuf;

use crate::templates;

/// Directories created under the project root, in creation order.
pub const DIRECTORIES: [&str; 13] = [
    "internal/handlers",
    "internal/services",
    "internal/repository",
    "internal/models/api",
    "internal/models/db",
    "internal/middlewares",
    "internal/utils",
    "pkg/logger",
    "pkg/config",
    "tests/unit",
    "tests/integration",
    "migrations",
    "docs",
];

const CMD_DIR: &str = "cmd";

/// relative path of the directory holding the entry point
pub fn cmd_dir(project_name: &str) -> PathBuf {
    PathBuf::from(CMD_DIR).join(project_name)
}

/// full directory manifest, starting with `cmd/<name>`
pub fn directories(project_name: &str) -> Vec<PathBuf> {
    let mut dirs = vec![cmd_dir(project_name)];
    dirs.extend(DIRECTORIES.iter().map(PathBuf::from));
    dirs
}

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
}

impl FileEntry {
    fn new(path: impl Into<PathBuf>, content: String) -> Self {
        FileEntry {
            path: path.into(),
            content,
        }
    }
}

/// rendered file manifest, in write order
pub fn files(project_name: &str) -> Vec<FileEntry> {
    vec![
        FileEntry::new(
            cmd_dir(project_name).join("main.go"),
            templates::main_go(project_name),
        ),
        FileEntry::new(".env", templates::env_file()),
        FileEntry::new(".gitignore", templates::gitignore()),
        FileEntry::new("Makefile", templates::makefile(project_name)),
        FileEntry::new("pkg/logger/logger.go", templates::logger_go()),
        FileEntry::new("pkg/config/config.go", templates::config_go()),
    ]
}

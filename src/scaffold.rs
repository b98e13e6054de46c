use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    error::{Result, ScaffoldError},
    manifest,
};

/// Builds the project tree under `<base>/<name>`.
///
/// Steps run in order and stop at the first error. Nothing is cleaned up, so
/// a failure after the root exists leaves a partial tree behind.
#[derive(Debug)]
pub struct Scaffold {
    name: String,
    root: PathBuf,
}

impl Scaffold {
    pub fn new(base: &Path, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(ScaffoldError::InvalidName(name.to_string()));
        }

        Ok(Scaffold {
            name: name.to_string(),
            root: base.join(name),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// creates the root, then the directory manifest, then the file manifest
    pub fn build(&self) -> Result<()> {
        self.create_root()?;
        self.create_directories()?;
        self.write_files()?;
        Ok(())
    }

    /// fails if the root already exists
    pub fn create_root(&self) -> Result<()> {
        fs::create_dir(&self.root).map_err(|source| ScaffoldError::CreateRoot {
            path: self.root.clone(),
            source,
        })?;
        info!("created project directory {}", self.root.display());
        Ok(())
    }

    pub fn create_directories(&self) -> Result<()> {
        for dir in manifest::directories(&self.name) {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .map_err(|source| ScaffoldError::CreateDir { path: path.clone(), source })?;
            debug!("created {}", path.display());
        }
        Ok(())
    }

    /// existing files are overwritten
    pub fn write_files(&self) -> Result<()> {
        for file in manifest::files(&self.name) {
            let path = self.root.join(&file.path);
            fs::write(&path, file.content)
                .map_err(|source| ScaffoldError::WriteFile { path: path.clone(), source })?;
            debug!("wrote {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::Scaffold;
    use crate::error::ScaffoldError;

    #[test]
    fn empty_name_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let err = Scaffold::new(tmp.path(), "").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName(_)));
    }

    #[test]
    fn build_creates_tree() {
        let tmp = TempDir::new().unwrap();
        let scaffold = Scaffold::new(tmp.path(), "shop").unwrap();
        scaffold.build().unwrap();

        let root = tmp.path().join("shop");
        assert!(root.join("cmd/shop").is_dir());
        assert!(root.join("internal/models/api").is_dir());
        assert!(root.join("docs").is_dir());

        let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
        assert!(makefile.contains("go run cmd/shop/main.go"));
    }

    #[test]
    fn create_root_fails_when_present() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dup")).unwrap();

        let scaffold = Scaffold::new(tmp.path(), "dup").unwrap();
        let err = scaffold.build().unwrap_err();

        assert!(matches!(err, ScaffoldError::CreateRoot { .. }));
        assert!(!tmp.path().join("dup/cmd").exists());
    }

    #[test]
    fn write_files_overwrites() {
        let tmp = TempDir::new().unwrap();
        let scaffold = Scaffold::new(tmp.path(), "app").unwrap();
        scaffold.create_root().unwrap();
        scaffold.create_directories().unwrap();
        fs::write(scaffold.root().join(".env"), "stale").unwrap();

        scaffold.write_files().unwrap();

        let env = fs::read_to_string(scaffold.root().join(".env")).unwrap();
        assert!(env.starts_with("APP_NAME=myapi\n"));
    }

    #[test]
    fn write_files_needs_directories() {
        let tmp = TempDir::new().unwrap();
        let scaffold = Scaffold::new(tmp.path(), "app").unwrap();
        scaffold.create_root().unwrap();

        let err = scaffold.write_files().unwrap_err();
        match err {
            ScaffoldError::WriteFile { path, .. } => assert!(path.ends_with("cmd/app/main.go")),
            other => panic!("unexpected error: {}", other),
        }
    }
}

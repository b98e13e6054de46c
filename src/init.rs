use std::{path::Path, process::Command};

use log::info;

use crate::{
    error::{Result, ScaffoldError},
    scaffold::Scaffold,
};

const GIT: &str = "git";

/// Initializes an empty repository in an existing directory.
pub trait RepoInitializer {
    fn init(&self, dir: &Path) -> Result<()>;
}

/// Runs `git init` inside the directory. Nothing is staged or committed.
#[derive(Debug, Clone)]
pub struct GitInit {
    program: String,
}

impl GitInit {
    pub fn new() -> Self {
        GitInit {
            program: GIT.to_string(),
        }
    }

    /// use another executable in place of `git`
    pub fn with_program(program: impl Into<String>) -> Self {
        GitInit {
            program: program.into(),
        }
    }
}

impl Default for GitInit {
    fn default() -> Self {
        GitInit::new()
    }
}

impl RepoInitializer for GitInit {
    fn init(&self, dir: &Path) -> Result<()> {
        info!("initializing git repo...");

        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(dir)
            .output()
            .map_err(ScaffoldError::GitSpawn)?;

        if !output.status.success() {
            return Err(ScaffoldError::GitFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        info!("initialized git repo in {}", dir.display());
        Ok(())
    }
}

/// builds `<base>/<name>` and then initializes a repository in it
pub fn create_project<I: RepoInitializer + ?Sized>(
    base: &Path,
    name: &str,
    initializer: &I,
) -> Result<()> {
    let scaffold = Scaffold::new(base, name)?;
    scaffold.build()?;
    initializer.init(scaffold.root())?;
    Ok(())
}

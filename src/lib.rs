pub mod error;
pub mod init;
pub mod manifest;
pub mod scaffold;
pub mod templates;

pub use error::{Result, ScaffoldError};
pub use init::{create_project, GitInit, RepoInitializer};

//! Contents of the generated files.
//!
//! Template text lives next to this module and is embedded at compile time.
//! Only the entry point and the Makefile depend on the project name, which is
//! substituted for every `{{project_name}}` placeholder.

const PROJECT_NAME_PLACEHOLDER: &str = "{{project_name}}";

const MAIN_GO: &str = include_str!("main.go.tmpl");
const ENV_FILE: &str = include_str!("env.tmpl");
const GITIGNORE: &str = include_str!("gitignore.tmpl");
const MAKEFILE: &str = include_str!("Makefile.tmpl");
const LOGGER_GO: &str = include_str!("logger.go.tmpl");
const CONFIG_GO: &str = include_str!("config.go.tmpl");

fn render(template: &str, project_name: &str) -> String {
    template.replace(PROJECT_NAME_PLACEHOLDER, project_name)
}

/// `cmd/<name>/main.go`, importing the generated config and logger packages
pub fn main_go(project_name: &str) -> String {
    render(MAIN_GO, project_name)
}

pub fn env_file() -> String {
    ENV_FILE.to_string()
}

pub fn gitignore() -> String {
    GITIGNORE.to_string()
}

/// `run`, `test` and `migrate` targets.
///
/// `migrate` reads `$(DB_URL)`, which none of the generated files define.
pub fn makefile(project_name: &str) -> String {
    render(MAKEFILE, project_name)
}

pub fn logger_go() -> String {
    LOGGER_GO.to_string()
}

pub fn config_go() -> String {
    CONFIG_GO.to_string()
}

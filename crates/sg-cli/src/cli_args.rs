use clap::{Args, Parser, Subcommand};

pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:8080/";
pub(crate) const DEFAULT_LOCALE: &str = "en_US";
pub(crate) const DEFAULT_PROJECT_FILE: &str = "scaffold.json";

#[derive(Debug, Parser)]
#[command(name = "sg-cli")]
#[command(about = "Selenium test generator for scaffolded web controllers")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Generate(GenerateArgs),
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ProjectArgs {
    #[arg(long = "project-dir")]
    pub(crate) project_dir: String,
    #[arg(long = "project-file")]
    pub(crate) project_file: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,
    #[arg(long = "controller")]
    pub(crate) controller: String,
    #[arg(long = "name")]
    pub(crate) name: Option<String>,
    #[arg(long = "server-url", default_value = DEFAULT_SERVER_URL)]
    pub(crate) server_url: String,
    #[arg(long = "locale", default_value = DEFAULT_LOCALE)]
    pub(crate) locale: String,
    /// RFC 3339 instant used instead of the current time.
    #[arg(long = "now")]
    pub(crate) now: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,
}

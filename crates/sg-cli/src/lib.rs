use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, Offset};
use clap::Parser;
use sg_api::{
    generate_test, is_generation_possible, Collaborators, GenerateOutcome, GenerateTestOptions,
    MetadataResolver,
};
use sg_builder::SynthesisContext;
use sg_core::{Locale, ScaffoldError};
use tracing_subscriber::EnvFilter;

mod cli_args;
mod error_map;
mod fs_files;
mod menu_store;
mod pom;
mod project_file;

pub(crate) use cli_args::{CheckArgs, Cli, GenerateArgs, Mode, ProjectArgs, DEFAULT_PROJECT_FILE};
pub(crate) use error_map::{
    emit_error, map_cli_file_read, map_cli_file_write, map_cli_menu_invalid, map_cli_menu_read,
    map_cli_menu_write, map_cli_now_invalid, map_cli_pom_invalid, map_cli_pom_read,
    map_cli_pom_write, map_cli_project_invalid, map_cli_project_path, map_cli_project_read,
};
pub(crate) use fs_files::{FsProjectFiles, WEBAPP_DIR};
pub(crate) use menu_store::{JsonMenuStore, MENU_FILE};
pub(crate) use pom::{PomBuildPlugins, POM_FILE};
pub(crate) use project_file::{resolve_project_dir, resolve_project_file, JsonProjectMetadata};

/// Logs go to stderr so stdout stays line-oriented for callers.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, ScaffoldError> {
    match cli.command {
        Mode::Generate(args) => run_generate(args),
        Mode::Check(args) => run_check(args),
    }
}

fn load_project(args: &ProjectArgs) -> Result<(PathBuf, JsonProjectMetadata), ScaffoldError> {
    let project_root = resolve_project_dir(&args.project_dir)?;
    let project_file = resolve_project_file(&project_root, args.project_file.as_deref());
    let metadata = JsonProjectMetadata::load(&project_file)?;
    Ok((project_root, metadata))
}

fn run_check(args: CheckArgs) -> Result<i32, ScaffoldError> {
    let (_, metadata) = load_project(&args.project)?;
    let possible = is_generation_possible(&metadata.project()?);
    println!("RESULT:OK");
    println!("GENERATION_POSSIBLE:{}", possible);
    Ok(0)
}

fn run_generate(args: GenerateArgs) -> Result<i32, ScaffoldError> {
    let (project_root, metadata) = load_project(&args.project)?;
    let project = metadata.project()?;
    if !is_generation_possible(&project) {
        return Err(ScaffoldError::new(
            "PROJECT_NOT_READY",
            format!(
                "Project '{}' does not have the MVC feature installed.",
                project.name
            ),
        ));
    }

    let options = GenerateTestOptions {
        controller: args.controller,
        name: args.name,
        server_url: args.server_url,
        context: SynthesisContext::new(
            args.locale.parse::<Locale>()?,
            resolve_now(args.now.as_deref())?,
        ),
    };

    let mut files = FsProjectFiles::new(&project_root);
    let mut menu = JsonMenuStore::new(files.resolve(MENU_FILE));
    let mut plugins = PomBuildPlugins::new(project_root.join(POM_FILE));
    let outcome = generate_test(
        Collaborators {
            metadata: &metadata,
            files: &mut files,
            menu: &mut menu,
            plugins: &mut plugins,
        },
        &options,
    )?;

    match outcome {
        GenerateOutcome::Skipped => println!("RESULT:SKIPPED"),
        GenerateOutcome::Generated(generated) => {
            println!("RESULT:OK");
            println!("TEST_PATH:{}", webapp_relative(&generated.test_path));
            println!("SUITE_PATH:{}", webapp_relative(&generated.suite_path));
            println!("STEPS:{}", generated.step_count);
            println!("PLUGIN_INSTALLED:{}", generated.plugin_installed);
        }
    }
    Ok(0)
}

fn webapp_relative(path: &str) -> String {
    Path::new(WEBAPP_DIR)
        .join(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<FixedOffset>, ScaffoldError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw).map_err(map_cli_now_invalid),
        None => {
            let now = Local::now();
            Ok(now.with_timezone(&now.offset().fix()))
        }
    }
}

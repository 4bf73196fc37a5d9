//! ddd-skeleton's main application entry point and orchestration logic.
//! Handles command-line argument parsing, state gating, and dispatch to
//! the generator's structure policy.

use std::path::{Path, PathBuf};

use ddd_skeleton::{
    cli::{get_args, Args, Command},
    constants::{STATE_FILE, TEMPLATES_DIR},
    error::{default_error_handler, Error, Result},
    generator::Generator,
    state::ProjectState,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Directory the installed tool lives in; the bundled templates and the
/// state file are resolved relative to it.
fn tool_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::Io)?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(".")))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template root and the persisted state file
/// 2. Reads the project-created flag
/// 3. Dispatches the command, refusing the disabled ones
/// 4. Persists the flag after a project creation that performed writes
fn run(args: Args) -> Result<()> {
    let template_root = match args.templates {
        Some(dir) => dir,
        None => tool_dir()?.join(TEMPLATES_DIR),
    };
    let state_path = tool_dir()?.join(STATE_FILE);
    let state = ProjectState::load(&state_path)?;

    let project_root = std::env::current_dir().map_err(Error::Io)?;
    let generator = Generator::new(template_root, project_root);

    // Disabled commands are documented capabilities the dispatcher
    // refuses to execute; the state gate still applies first.
    if !args.command.is_implemented() {
        if !state.project_created {
            println!("Error: you must create a project first using create-project.");
            return Ok(());
        }
        println!("{} is not implemented yet.", args.command.name());
        return Ok(());
    }

    if let Command::CreateProject { name } = args.command {
        let name = name.to_lowercase();
        if generator.create_project(&name) {
            ProjectState { project_created: true }.save(&state_path)?;
        }
    }

    Ok(())
}

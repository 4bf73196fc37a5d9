//! Command-line interface implementation for ddd-skeleton.
//! Provides argument parsing and help text formatting using clap.

use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for ddd-skeleton.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ddd-skeleton: DDD project scaffolding generator",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the bundled template directory
    #[arg(long, global = true, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

/// Commands exposed by the tool. Only `create-project` is enabled; the
/// other two are documented capabilities the dispatcher refuses to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project for the given context
    CreateProject {
        /// Name of the context to create (lower-cased before use)
        #[arg(long)]
        name: String,
    },

    /// Create a context inside an existing project (not implemented yet)
    CreateContext {
        /// Name of the context to create (lower-cased before use)
        #[arg(long)]
        name: String,
    },

    /// Create a single file inside a context (not implemented yet)
    CreateFile {
        /// Name of the file to create
        #[arg(long)]
        name: String,

        /// Context the file belongs to
        #[arg(long)]
        context: String,

        /// Kind of file (e.g. entity, repository)
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,
    },
}

impl Command {
    /// Whether the dispatcher is allowed to execute this command.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Command::CreateProject { .. })
    }

    /// Kebab-case command name as it appears on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateProject { .. } => "create-project",
            Command::CreateContext { .. } => "create-context",
            Command::CreateFile { .. } => "create-file",
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With the default success code after printing the usage hint for any
///   invalid input (notices never surface as a process failure)
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::InvalidSubcommand
                || e.kind() == ErrorKind::MissingSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
            } else {
                let _ = e.print();
            }
            std::process::exit(0);
        }
    }
}
